//! NAPI-RS bindings for the Mimic sidebar engine.
//!
//! Exposes the store and sidebar controller to Node.js.

use napi_derive::napi;
use tracing_subscriber::EnvFilter;

mod sidebar;
mod types;

pub use sidebar::*;
pub use types::*;

/// Library version
#[napi]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a log subscriber writing to stderr.
///
/// `filter` uses `RUST_LOG` syntax and falls back to the `RUST_LOG`
/// environment variable. Returns false if a subscriber was already installed.
#[napi]
pub fn init_logging(filter: Option<String>) -> bool {
    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
