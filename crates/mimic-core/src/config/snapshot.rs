//! Store snapshot documents used to seed a [`MockCollectionStore`](crate::store::MockCollectionStore).

use crate::config::error::ConfigError;
use crate::config::parser::{load_config, parse_config};
use crate::types::mock::Mock;
use serde::{Deserialize, Serialize};

/// Group entry of a snapshot. Membership comes from the mocks' `groupId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSeed {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Groups and mocks in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub groups: Vec<GroupSeed>,
    #[serde(default)]
    pub mocks: Vec<Mock>,
}

impl Snapshot {
    /// Parse snapshot content, picking the format from `path`
    pub fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        parse_config(content, path)
    }

    /// Read and parse a snapshot file
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        load_config(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockCollectionStore;
    use rstest::rstest;

    const SNAPSHOT_YAML: &str = r#"
groups:
  - id: g1
    name: Users
mocks:
  - id: m1
    url: /api/users
    groupId: g1
  - id: m2
    name: Health
    method: HEAD
    url: /health
    isActive: false
    response:
      status: 204
"#;

    #[rstest]
    fn test_parse_yaml_snapshot() {
        let snapshot = Snapshot::parse(SNAPSHOT_YAML, "mocks.yaml").expect("Should parse");
        assert_eq!(snapshot.groups.len(), 1);
        assert!(snapshot.groups[0].active);
        assert_eq!(snapshot.mocks[0].group_id.as_deref(), Some("g1"));
        assert!(!snapshot.mocks[1].is_active);
        assert_eq!(snapshot.mocks[1].response.status, 204);
    }

    #[rstest]
    fn test_snapshot_seeds_store() {
        let snapshot = Snapshot::parse(SNAPSHOT_YAML, "mocks.yml").expect("Should parse");
        let store = MockCollectionStore::from_snapshot(snapshot).expect("Should seed");
        assert_eq!(store.group_mocks("g1").len(), 1);
        assert_eq!(store.ungrouped_mocks().count(), 1);
    }

    #[rstest]
    fn test_parse_empty_json_snapshot() {
        let snapshot = Snapshot::parse("{}", "mocks.json").expect("Should parse");
        assert_eq!(snapshot, Snapshot::default());
    }
}
