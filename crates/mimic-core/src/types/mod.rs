//! Core domain types for mocks, groups, and sidebar entries.

pub mod entry;
pub mod group;
pub mod mock;
