//! Matching captured requests against mocks.

use crate::matching::url::url_matches;
use crate::types::mock::{HttpMethod, Mock};

/// A captured HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub method: HttpMethod,
    /// Request url (path plus optional query string)
    pub url: String,
}

impl MockRequest {
    /// Create a request
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// Check whether `mock` would answer `request`.
///
/// `group_active` is the enable switch of the mock's group, `true` for
/// standalone mocks.
pub fn mock_matches_request(mock: &Mock, group_active: bool, request: &MockRequest) -> bool {
    if !mock.is_active || !group_active {
        return false;
    }
    if mock.method != request.method {
        return false;
    }
    url_matches(&mock.url, &request.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::mock::MockResponse;
    use rstest::rstest;

    fn mock(method: HttpMethod, url: &str, is_active: bool) -> Mock {
        Mock {
            id: "m1".to_string(),
            name: "m1".to_string(),
            method,
            url: url.to_string(),
            is_active,
            group_id: None,
            response: MockResponse::default(),
        }
    }

    #[rstest]
    #[case(HttpMethod::Get, "/api/users/{id}", true, true, HttpMethod::Get, "/api/users/3", true)]
    #[case(HttpMethod::Get, "/api/users/{id}", false, true, HttpMethod::Get, "/api/users/3", false)]
    #[case(HttpMethod::Get, "/api/users/{id}", true, false, HttpMethod::Get, "/api/users/3", false)]
    #[case(HttpMethod::Post, "/api/users", true, true, HttpMethod::Get, "/api/users", false)]
    #[case(HttpMethod::Get, "/api/users", true, true, HttpMethod::Get, "/api/posts", false)]
    fn test_mock_matches_request(
        #[case] method: HttpMethod,
        #[case] url: &str,
        #[case] is_active: bool,
        #[case] group_active: bool,
        #[case] request_method: HttpMethod,
        #[case] request_url: &str,
        #[case] expected: bool,
    ) {
        let request = MockRequest::new(request_method, request_url);
        assert_eq!(
            mock_matches_request(&mock(method, url, is_active), group_active, &request),
            expected
        );
    }
}
