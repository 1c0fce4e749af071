//! Diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts the optional
//! pre-change and post-change snapshots of a change record and produces a
//! [`ChangeDiff`].

use crate::diff::model::{ChangeDiff, DiffClassification, FieldChange};
use crate::snapshot::Snapshot;
use std::collections::BTreeSet;
use tracing::debug;

/// Compute the structured diff between two snapshots.
///
/// An absent snapshot and an empty snapshot are treated identically: either
/// condition on either side yields `MissingSnapshot` with empty change maps,
/// since no meaningful comparison is possible.
///
/// Keys present only in `post` are reported as added, keys present only in
/// `pre` as removed, and keys present in both with unequal values as updated.
/// The three sets are disjoint by construction. Pure computation; no error
/// conditions.
pub fn compute_diff(pre: Option<&Snapshot>, post: Option<&Snapshot>) -> ChangeDiff {
    let mut diff = ChangeDiff {
        classification: DiffClassification::MissingSnapshot,
        added: Default::default(),
        removed: Default::default(),
        updated: Default::default(),
    };

    let (pre, post) = match (pre, post) {
        (Some(pre), Some(post)) if !pre.is_empty() && !post.is_empty() => (pre, post),
        _ => return diff,
    };

    let pre_keys: BTreeSet<&str> = pre.keys().map(|k| k.as_str()).collect();
    let post_keys: BTreeSet<&str> = post.keys().map(|k| k.as_str()).collect();

    for key in post_keys.difference(&pre_keys) {
        diff.added.insert(key.to_string(), post[*key].clone());
    }

    for key in pre_keys.difference(&post_keys) {
        diff.removed.insert(key.to_string(), pre[*key].clone());
    }

    for key in pre_keys.intersection(&post_keys) {
        if pre[*key] != post[*key] {
            diff.updated.insert(
                key.to_string(),
                FieldChange {
                    old: pre[*key].clone(),
                    new: post[*key].clone(),
                },
            );
        }
    }

    diff.classification = if diff.is_empty() {
        DiffClassification::Identical
    } else {
        DiffClassification::Changed
    };

    debug!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        updated = diff.updated.len(),
        "computed change diff"
    );

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(v: serde_json::Value) -> Snapshot {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_absent_pre_is_missing() {
        let post = snapshot(json!({"status": "active"}));
        let diff = compute_diff(None, Some(&post));
        assert_eq!(diff.classification, DiffClassification::MissingSnapshot);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_absent_post_is_missing() {
        let pre = snapshot(json!({"status": "active"}));
        let diff = compute_diff(Some(&pre), None);
        assert_eq!(diff.classification, DiffClassification::MissingSnapshot);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_empty_side_is_missing() {
        let pre = snapshot(json!({}));
        let post = snapshot(json!({"status": "active"}));
        let diff = compute_diff(Some(&pre), Some(&post));
        assert_eq!(diff.classification, DiffClassification::MissingSnapshot);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_identical_snapshots() {
        let pre = snapshot(json!({"status": "active", "vid": 100}));
        let diff = compute_diff(Some(&pre), Some(&pre.clone()));
        assert_eq!(diff.classification, DiffClassification::Identical);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_added_key_carries_post_value() {
        let pre = snapshot(json!({"status": "active"}));
        let post = snapshot(json!({"status": "active", "region": "us-east"}));
        let diff = compute_diff(Some(&pre), Some(&post));
        assert_eq!(diff.classification, DiffClassification::Changed);
        assert_eq!(diff.added["region"], json!("us-east"));
        assert!(diff.removed.is_empty());
        assert!(diff.updated.is_empty());
    }

    #[test]
    fn test_removed_key_carries_pre_value() {
        let pre = snapshot(json!({"name": "a", "tag": "x"}));
        let post = snapshot(json!({"name": "a"}));
        let diff = compute_diff(Some(&pre), Some(&post));
        assert_eq!(diff.removed["tag"], json!("x"));
        assert!(diff.added.is_empty());
        assert!(diff.updated.is_empty());
    }

    #[test]
    fn test_updated_key_carries_both_values() {
        let pre = snapshot(json!({"count": 1}));
        let post = snapshot(json!({"count": 2}));
        let diff = compute_diff(Some(&pre), Some(&post));
        let change = &diff.updated["count"];
        assert_eq!(change.old, json!(1));
        assert_eq!(change.new, json!(2));
    }

    #[test]
    fn test_value_equality_not_identity() {
        // Equal values held in separately-built snapshots are not a change.
        let pre = snapshot(json!({"tags": ["a", "b"]}));
        let post = snapshot(json!({"tags": ["a", "b"]}));
        let diff = compute_diff(Some(&pre), Some(&post));
        assert_eq!(diff.classification, DiffClassification::Identical);
    }

    #[test]
    fn test_change_sets_are_disjoint() {
        let pre = snapshot(json!({"a": 1, "b": 2}));
        let post = snapshot(json!({"b": 3, "c": 4}));
        let diff = compute_diff(Some(&pre), Some(&post));
        assert_eq!(diff.added.len(), 1);
        assert!(diff.added.contains_key("c"));
        assert_eq!(diff.removed.len(), 1);
        assert!(diff.removed.contains_key("a"));
        assert_eq!(diff.updated.len(), 1);
        assert!(diff.updated.contains_key("b"));
    }
}
