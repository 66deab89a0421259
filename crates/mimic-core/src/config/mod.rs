//! Configuration: sidebar settings and store snapshots.
//!
//! Both documents can be written as YAML, JSON, or JSONC; the format is picked
//! from the file extension.

pub mod error;
pub mod parser;
pub mod settings;
pub mod snapshot;

pub use error::ConfigError;
pub use settings::SidebarConfig;
pub use snapshot::{GroupSeed, Snapshot};
