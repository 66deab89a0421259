//! Plain objects and enums crossing the Node.js boundary.

use mimic_core::sidebar::view::{GroupRow as CoreGroupRow, MockRow as CoreMockRow};
use mimic_core::sidebar::{
    ClickIntent as CoreClickIntent, DropOutcome as CoreDropOutcome, Notice as CoreNotice,
    NoticeLevel, SidebarView as CoreSidebarView,
};
use mimic_core::types::entry::{EntryKind as CoreEntryKind, SidebarEntry as CoreSidebarEntry};
use mimic_core::types::group::Group as CoreGroup;
use mimic_core::types::mock::{HttpMethod as CoreHttpMethod, Mock as CoreMock};
use napi_derive::napi;
use std::collections::HashMap;

/// HTTP method of a mock
#[napi]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl From<CoreHttpMethod> for HttpMethod {
    fn from(m: CoreHttpMethod) -> Self {
        match m {
            CoreHttpMethod::Get => HttpMethod::Get,
            CoreHttpMethod::Post => HttpMethod::Post,
            CoreHttpMethod::Put => HttpMethod::Put,
            CoreHttpMethod::Patch => HttpMethod::Patch,
            CoreHttpMethod::Delete => HttpMethod::Delete,
            CoreHttpMethod::Head => HttpMethod::Head,
            CoreHttpMethod::Options => HttpMethod::Options,
        }
    }
}

impl From<HttpMethod> for CoreHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => CoreHttpMethod::Get,
            HttpMethod::Post => CoreHttpMethod::Post,
            HttpMethod::Put => CoreHttpMethod::Put,
            HttpMethod::Patch => CoreHttpMethod::Patch,
            HttpMethod::Delete => CoreHttpMethod::Delete,
            HttpMethod::Head => CoreHttpMethod::Head,
            HttpMethod::Options => CoreHttpMethod::Options,
        }
    }
}

#[napi]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Mock,
    Group,
}

impl From<CoreEntryKind> for EntryKind {
    fn from(k: CoreEntryKind) -> Self {
        match k {
            CoreEntryKind::Mock => EntryKind::Mock,
            CoreEntryKind::Group => EntryKind::Group,
        }
    }
}

#[napi]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickIntent {
    Replace,
    Additive,
    Range,
    Preserve,
}

impl From<CoreClickIntent> for ClickIntent {
    fn from(i: CoreClickIntent) -> Self {
        match i {
            CoreClickIntent::Replace => ClickIntent::Replace,
            CoreClickIntent::Additive => ClickIntent::Additive,
            CoreClickIntent::Range => ClickIntent::Range,
            CoreClickIntent::Preserve => ClickIntent::Preserve,
        }
    }
}

/// A selectable sidebar row
#[napi(object)]
#[derive(Clone)]
pub struct SidebarEntry {
    pub kind: EntryKind,
    pub id: String,
}

impl From<&CoreSidebarEntry> for SidebarEntry {
    fn from(e: &CoreSidebarEntry) -> Self {
        Self {
            kind: e.kind().into(),
            id: e.id().to_string(),
        }
    }
}

impl From<SidebarEntry> for CoreSidebarEntry {
    fn from(e: SidebarEntry) -> Self {
        match e.kind {
            EntryKind::Mock => CoreSidebarEntry::Mock(e.id),
            EntryKind::Group => CoreSidebarEntry::Group(e.id),
        }
    }
}

/// Click gesture on a row
#[napi(object)]
#[derive(Clone)]
pub struct ClickEvent {
    pub entry: SidebarEntry,
    /// Right-click
    pub secondary: Option<bool>,
    pub shift_key: Option<bool>,
    pub meta_key: Option<bool>,
    pub ctrl_key: Option<bool>,
}

#[napi(object)]
#[derive(Clone)]
pub struct Mock {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub is_active: bool,
    pub group_id: Option<String>,
    pub status: u32,
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
    pub delay: Option<u32>,
}

impl From<&CoreMock> for Mock {
    fn from(m: &CoreMock) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            method: HttpMethod::from(m.method),
            url: m.url.clone(),
            is_active: m.is_active,
            group_id: m.group_id.clone(),
            status: m.response.status as u32,
            headers: m.response.headers.clone(),
            body: m.response.body.clone(),
            delay: m
                .response
                .delay
                .map(|d| u32::try_from(d).unwrap_or(u32::MAX)),
        }
    }
}

#[napi(object)]
#[derive(Clone)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub mocks: Vec<String>,
}

impl From<&CoreGroup> for Group {
    fn from(g: &CoreGroup) -> Self {
        Self {
            id: g.id.clone(),
            name: g.name.clone(),
            active: g.active,
            mocks: g.mocks.clone(),
        }
    }
}

#[napi(object)]
#[derive(Clone)]
pub struct MockRow {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub active: bool,
    pub selected: bool,
}

impl From<&CoreMockRow> for MockRow {
    fn from(r: &CoreMockRow) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            method: HttpMethod::from(r.method),
            url: r.url.clone(),
            active: r.active,
            selected: r.selected,
        }
    }
}

#[napi(object)]
#[derive(Clone)]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub selected: bool,
    pub open: bool,
    pub member_count: u32,
    pub mocks: Vec<MockRow>,
}

impl From<&CoreGroupRow> for GroupRow {
    fn from(r: &CoreGroupRow) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            active: r.active,
            selected: r.selected,
            open: r.open,
            member_count: r.member_count as u32,
            mocks: r.mocks.iter().map(MockRow::from).collect(),
        }
    }
}

/// Rendered sidebar
#[napi(object)]
#[derive(Clone)]
pub struct SidebarView {
    pub groups: Vec<GroupRow>,
    pub mocks: Vec<MockRow>,
    pub width: u32,
}

impl From<&CoreSidebarView> for SidebarView {
    fn from(v: &CoreSidebarView) -> Self {
        Self {
            groups: v.groups.iter().map(GroupRow::from).collect(),
            mocks: v.mocks.iter().map(MockRow::from).collect(),
            width: v.width,
        }
    }
}

#[napi(object)]
#[derive(Clone)]
pub struct Notice {
    /// "info" or "error"
    pub level: String,
    pub message: String,
}

impl From<CoreNotice> for Notice {
    fn from(n: CoreNotice) -> Self {
        let level = match n.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        Self {
            level: level.to_string(),
            message: n.message,
        }
    }
}

/// Result of dropping a dragged mock
#[napi(object)]
#[derive(Clone)]
pub struct DropResult {
    /// "ungrouped", "regrouped", "unchanged", "mismatch" or "unhandled"
    pub kind: String,
    pub mock_id: Option<String>,
    pub group_id: Option<String>,
}

impl From<CoreDropOutcome> for DropResult {
    fn from(o: CoreDropOutcome) -> Self {
        let (kind, mock_id, group_id) = match o {
            CoreDropOutcome::Ungrouped { mock_id } => ("ungrouped", Some(mock_id), None),
            CoreDropOutcome::Regrouped { mock_id, group_id } => {
                ("regrouped", Some(mock_id), Some(group_id))
            }
            CoreDropOutcome::Unchanged { mock_id } => ("unchanged", Some(mock_id), None),
            CoreDropOutcome::Mismatch { mock_id } => ("mismatch", Some(mock_id), None),
            CoreDropOutcome::Unhandled => ("unhandled", None, None),
        };
        Self {
            kind: kind.to_string(),
            mock_id,
            group_id,
        }
    }
}
