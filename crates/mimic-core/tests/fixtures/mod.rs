//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Snapshot with one group of two mocks followed by three standalone mocks
pub const SIDEBAR_SNAPSHOT: &str = r#"
groups:
  - id: users
    name: Users API
mocks:
  - id: list-users
    name: List users
    url: /api/users
    groupId: users
  - id: get-user
    name: Get user
    url: /api/users/{id}
    groupId: users
    response:
      status: 200
      body: { id: 1, name: Ada }
  - id: health
    name: Health
    method: HEAD
    url: /health
  - id: login
    name: Login
    method: POST
    url: /auth/login
    response:
      status: 401
  - id: logout
    name: Logout
    method: POST
    url: /auth/logout
"#;

/// Write `content` to a temp file with the given extension
pub fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write temp file");
    file
}
