//! Change record consumed from the host's change log.

use chdiff_core::Snapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One historical change record for a tracked object.
///
/// Owned by the host application; this crate only reads the two snapshot
/// attributes. Either side may be absent: creations store no pre-change
/// snapshot, deletions no post-change snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectChange {
    /// Field values before the change, if a snapshot was stored
    pub prechange_data: Option<Snapshot>,
    /// Field values after the change, if a snapshot was stored
    pub postchange_data: Option<Snapshot>,
}

impl ObjectChange {
    /// Create a record from the two optional snapshots.
    pub fn new(prechange_data: Option<Snapshot>, postchange_data: Option<Snapshot>) -> Self {
        Self {
            prechange_data,
            postchange_data,
        }
    }

    /// Default field access for generic display columns.
    ///
    /// Resolves against the post-change snapshot first (the record's latest
    /// known state), then the pre-change snapshot, so deleted objects still
    /// resolve their final field values.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.postchange_data
            .as_ref()
            .and_then(|snap| snap.get(key))
            .or_else(|| self.prechange_data.as_ref().and_then(|snap| snap.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(v: serde_json::Value) -> Snapshot {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_field_prefers_postchange() {
        let record = ObjectChange::new(
            Some(snapshot(json!({"status": "staged"}))),
            Some(snapshot(json!({"status": "active"}))),
        );
        assert_eq!(record.field("status"), Some(&json!("active")));
    }

    #[test]
    fn test_field_falls_back_to_prechange() {
        // Deletion: only the pre-change snapshot survives.
        let record = ObjectChange::new(Some(snapshot(json!({"status": "active"}))), None);
        assert_eq!(record.field("status"), Some(&json!("active")));
    }

    #[test]
    fn test_field_unknown_key() {
        let record = ObjectChange::new(None, Some(snapshot(json!({"status": "active"}))));
        assert_eq!(record.field("rack"), None);
    }
}
