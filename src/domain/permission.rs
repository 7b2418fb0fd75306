// src/domain/permission.rs
use crate::domain::ApiResponse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sharing permissions attached to a notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub owners: BTreeSet<String>,
    #[serde(default)]
    pub readers: BTreeSet<String>,
    #[serde(default)]
    pub writers: BTreeSet<String>,
}

impl Permission {
    pub fn new<I, S>(owners: I, readers: I, writers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owners: owners.into_iter().map(Into::into).collect(),
            readers: readers.into_iter().map(Into::into).collect(),
            writers: writers.into_iter().map(Into::into).collect(),
        }
    }
}

pub type PermissionResponse = ApiResponse<Permission>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_permission_when_round_tripping_then_sets_are_preserved() {
        let permission = Permission::new(
            vec!["alice", "bob"],
            vec!["carol"],
            vec!["alice", "dave"],
        );

        let json = serde_json::to_string(&permission).unwrap();
        let decoded: Permission = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, permission);
        assert_eq!(decoded.owners.len(), 2);
        assert!(decoded.writers.contains("dave"));
    }

    #[test]
    fn given_duplicate_principals_when_decoding_then_collapses_them() {
        let json = r#"{"owners": ["alice", "alice"], "readers": [], "writers": ["bob"]}"#;

        let permission: Permission = serde_json::from_str(json).unwrap();

        assert_eq!(permission.owners.len(), 1);
        assert!(permission.readers.is_empty());
    }

    #[test]
    fn given_partial_permission_when_decoding_then_missing_sets_are_empty() {
        let permission: Permission = serde_json::from_str(r#"{"readers": ["eve"]}"#).unwrap();

        assert!(permission.owners.is_empty());
        assert!(permission.writers.is_empty());
        assert!(permission.readers.contains("eve"));
    }

    #[test]
    fn given_permission_response_when_decoding_then_reads_body() {
        let json = r#"{
            "status": "OK",
            "message": "",
            "body": {"owners": ["admin"], "readers": ["user1"], "writers": ["admin"]}
        }"#;

        let response: PermissionResponse = serde_json::from_str(json).unwrap();

        assert!(response.body.owners.contains("admin"));
        assert!(response.body.readers.contains("user1"));
    }
}
