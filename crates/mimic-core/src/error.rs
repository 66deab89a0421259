//! Error types for store mutations and the crate as a whole.

use crate::config::error::ConfigError;
use thiserror::Error;

/// Top-level error type for Mimic core operations
#[derive(Debug, Error)]
pub enum Error {
    /// The store rejected a mutation
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration or snapshot loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No mock with this id
    #[error("Mock not found: {mock_id}")]
    MockNotFound { mock_id: String },

    /// No group with this id
    #[error("Group not found: {group_id}")]
    GroupNotFound { group_id: String },

    /// Group names must contain a non-whitespace character
    #[error("Invalid group name: '{name}'")]
    InvalidGroupName { name: String },

    /// Mock URLs must not be empty
    #[error("Invalid mock url: '{url}'")]
    InvalidUrl { url: String },

    /// Two mocks or two groups share an id
    #[error("Duplicate id: {id}")]
    DuplicateId { id: String },
}
