//! Request matching used to find the mocks answering a captured request.

mod request;
mod url;

pub use request::{mock_matches_request, MockRequest};
pub use url::url_matches;
