//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections use `BTreeMap` for deterministic ordering and serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The structured diff between the two snapshots of one change record.
///
/// All change maps are populated even when empty, so downstream consumers
/// can process every diff uniformly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeDiff {
    /// High-level classification of the diff
    pub classification: DiffClassification,
    /// Fields present only post-change, keyed by field name, carrying the new value
    pub added: BTreeMap<String, Value>,
    /// Fields present only pre-change, keyed by field name, carrying the old value
    pub removed: BTreeMap<String, Value>,
    /// Fields present on both sides with differing values
    pub updated: BTreeMap<String, FieldChange>,
}

impl ChangeDiff {
    /// True if no field-level changes were detected.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// High-level classification of the diff result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// At least one snapshot is absent or empty; no comparison was possible
    MissingSnapshot,
    /// Both snapshots present with identical field maps
    Identical,
    /// At least one field was added, removed, or updated
    Changed,
}

/// Old/new values for a field present on both sides with differing values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    /// Value in the pre-change snapshot
    pub old: Value,
    /// Value in the post-change snapshot
    pub new: Value,
}
