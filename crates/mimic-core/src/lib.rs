//! Core library for the Mimic mocks sidebar.
//!
//! - [`store`]: in-memory mock collection with change notifications
//! - [`sidebar`]: selection, grouping, drag and drop, and the controller composing them
//! - [`config`]: sidebar settings and store snapshots (YAML/JSON/JSONC)

pub mod config;
pub mod error;
pub mod matching;
pub mod sidebar;
pub mod store;
pub mod types;

pub use error::{Error, StoreError};
