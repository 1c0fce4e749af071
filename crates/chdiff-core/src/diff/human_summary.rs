//! Human-readable summary renderer for change diffs.

use crate::diff::engine::compute_diff;
use crate::diff::model::ChangeDiff;
use crate::snapshot::Snapshot;
use serde_json::Value;

/// Fixed sentinel returned when there is nothing to report: one or both
/// snapshots absent/empty, or both present and identical.
pub const NO_CHANGES_SENTINEL: &str = "No changes detected";

/// Render a human-readable one-line summary of a [`ChangeDiff`].
///
/// Segments are emitted in added, removed, updated group order, sorted by
/// field name within each group, and joined with `", "`. The result is never
/// empty: a diff with no changes renders as [`NO_CHANGES_SENTINEL`].
pub fn render_human_summary(diff: &ChangeDiff) -> String {
    let mut segments = Vec::new();

    for (key, value) in &diff.added {
        segments.push(format!("Added {} = {}", key, display_value(value)));
    }

    for (key, value) in &diff.removed {
        segments.push(format!("Removed {} = {}", key, display_value(value)));
    }

    for (key, change) in &diff.updated {
        segments.push(format!(
            "Updated {}: {} → {}",
            key,
            display_value(&change.old),
            display_value(&change.new)
        ));
    }

    if segments.is_empty() {
        return NO_CHANGES_SENTINEL.to_string();
    }
    segments.join(", ")
}

/// Compute and render the summary for one change record's snapshots.
///
/// Convenience composition of [`compute_diff`] and [`render_human_summary`];
/// this is the value of the change-log table's "Change Summary" column.
pub fn format_summary(pre: Option<&Snapshot>, post: Option<&Snapshot>) -> String {
    render_human_summary(&compute_diff(pre, post))
}

/// Render a field value for display: strings bare (no quotes), everything
/// else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
