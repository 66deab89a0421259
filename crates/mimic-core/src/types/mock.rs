//! Mock types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a mock, assigned by the store.
pub type MockId = String;

/// HTTP method a mock answers to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Response served by a mock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MockResponse {
    /// HTTP status code (100-599)
    #[serde(default = "default_status")]
    pub status: u16,
    /// Response headers
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Response body (JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Delay in milliseconds before responding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

fn default_status() -> u16 {
    200
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: default_status(),
            headers: HashMap::new(),
            body: None,
            delay: None,
        }
    }
}

/// A configured stand-in response bound to a request matcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mock {
    /// Unique identifier
    pub id: MockId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// HTTP method to match
    #[serde(default)]
    pub method: HttpMethod,
    /// URL pattern to match (supports {param} placeholders)
    pub url: String,
    /// Whether the mock answers requests
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Group this mock belongs to
    #[serde(default)]
    pub group_id: Option<String>,
    /// Response to serve
    #[serde(default)]
    pub response: MockResponse,
}

fn default_active() -> bool {
    true
}

/// Fields for a mock about to be created; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMock {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub is_active: bool,
    pub group_id: Option<String>,
    pub response: MockResponse,
}

impl NewMock {
    /// Create an active mock with an empty response for the given request line.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            name: url.clone(),
            method,
            url,
            is_active: true,
            group_id: None,
            response: MockResponse::default(),
        }
    }

    /// Place the new mock in a group
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// Every field of an existing mock except its id.
impl From<&Mock> for NewMock {
    fn from(mock: &Mock) -> Self {
        Self {
            name: mock.name.clone(),
            method: mock.method,
            url: mock.url.clone(),
            is_active: mock.is_active,
            group_id: mock.group_id.clone(),
            response: mock.response.clone(),
        }
    }
}

/// Partial update of a mock. `None` leaves the field untouched.
///
/// `group_id` is doubly optional: `Some(None)` ungroups the mock,
/// `Some(Some(id))` moves it into group `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockPatch {
    pub name: Option<String>,
    pub method: Option<HttpMethod>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
    pub group_id: Option<Option<String>>,
    pub response: Option<MockResponse>,
}

impl MockPatch {
    /// Patch that only clears the group.
    pub fn ungroup() -> Self {
        Self {
            group_id: Some(None),
            ..Self::default()
        }
    }

    /// Patch that only moves the mock into `group_id`.
    pub fn assign_group(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(Some(group_id.into())),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, mock: &mut Mock) {
        if let Some(name) = self.name {
            mock.name = name;
        }
        if let Some(method) = self.method {
            mock.method = method;
        }
        if let Some(url) = self.url {
            mock.url = url;
        }
        if let Some(is_active) = self.is_active {
            mock.is_active = is_active;
        }
        if let Some(group_id) = self.group_id {
            mock.group_id = group_id;
        }
        if let Some(response) = self.response {
            mock.response = response;
        }
    }
}
