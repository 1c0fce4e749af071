//! chdiff-table - "Change Summary" display column for the change-log table
//!
//! This crate is the table-facing surface over `chdiff-core`:
//! - [`record::ObjectChange`] — the change record consumed read-only from the
//!   host, carrying the pre-change and post-change snapshots
//! - [`column::TableColumn`] — a display column whose resolver special-cases
//!   the `human_summary` key and falls back to default field access otherwise
//! - [`schema::TableSchema`] — the host's change-log table definition, plus
//!   [`schema::register_changelog_columns`], the one-time startup hook that
//!   attaches the summary column

pub mod column;
pub mod record;
pub mod schema;

// Re-export commonly used types
pub use column::{
    change_summary_column, TableColumn, EMPTY_CELL, SUMMARY_COLUMN_KEY, SUMMARY_COLUMN_LABEL,
};
pub use record::ObjectChange;
pub use schema::{register_changelog_columns, TableSchema};
