//! Display columns for the change-log table.

use crate::record::ObjectChange;
use chdiff_core::diff::human_summary::{display_value, format_summary};

/// Column key under which the summary column is registered.
pub const SUMMARY_COLUMN_KEY: &str = "human_summary";

/// Display label for the summary column.
pub const SUMMARY_COLUMN_LABEL: &str = "Change Summary";

/// Default cell value when a column's lookup resolves nothing at all.
///
/// Distinct from [`chdiff_core::NO_CHANGES_SENTINEL`], which applies when the
/// record exists but its two snapshots are absent or equal.
pub const EMPTY_CELL: &str = "- -";

/// One display column of the change-log table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Key the column resolves against (field name or `human_summary`)
    pub key: String,
    /// Human-facing column header
    pub label: String,
    /// Cell value when resolution yields nothing
    pub default: String,
}

impl TableColumn {
    /// Create a generic column resolving `key` via default field access.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default: EMPTY_CELL.to_string(),
        }
    }

    /// Resolve this column's cell value for one record.
    ///
    /// The `human_summary` key dispatches to the diff summary; every other
    /// key delegates to the record's default field access, falling back to
    /// the column default when the lookup resolves nothing.
    pub fn resolve(&self, record: &ObjectChange) -> String {
        if self.key == SUMMARY_COLUMN_KEY {
            return format_summary(
                record.prechange_data.as_ref(),
                record.postchange_data.as_ref(),
            );
        }
        match record.field(&self.key) {
            Some(value) => display_value(value),
            None => self.default.clone(),
        }
    }
}

/// The derived "Change Summary" column added to the host's change-log table.
pub fn change_summary_column() -> TableColumn {
    TableColumn::new(SUMMARY_COLUMN_KEY, SUMMARY_COLUMN_LABEL)
}
