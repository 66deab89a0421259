//! Sidebar settings.

use serde::{Deserialize, Serialize};

/// Settings for the mocks sidebar. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarConfig {
    /// Name given to groups created from a selection
    pub default_group_name: String,
    /// Persisted sidebar width in pixels
    pub sidebar_width: u32,
    /// Lower bound applied when the sidebar is resized
    pub min_sidebar_width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_group_name: "Grouped Mocks".to_string(),
            sidebar_width: 250,
            min_sidebar_width: 150,
        }
    }
}

impl SidebarConfig {
    /// Clamp a requested width to the configured minimum
    pub fn clamp_width(&self, width: u32) -> u32 {
        width.max(self.min_sidebar_width)
    }
}
