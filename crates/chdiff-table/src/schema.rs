//! Change-log table definition and column registration.

use crate::column::{change_summary_column, TableColumn};
use crate::record::ObjectChange;
use chdiff_core::{CdError, Result};
use tracing::info;

/// A table definition: a named, ordered list of display columns.
///
/// The host owns the table and its built-in columns; extensions append
/// their columns during startup via [`register_changelog_columns`].
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    name: String,
    columns: Vec<TableColumn>,
}

impl TableSchema {
    /// Create an empty table definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered columns, in registration order.
    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Look up a column by key.
    pub fn column(&self, key: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Append a column to the table.
    ///
    /// # Errors
    ///
    /// - `DuplicateColumn` — a column with the same key is already registered
    pub fn register_column(&mut self, column: TableColumn) -> Result<()> {
        if self.column(&column.key).is_some() {
            return Err(CdError::DuplicateColumn {
                key: column.key.clone(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Resolve one record against every registered column, in column order.
    pub fn resolve_row(&self, record: &ObjectChange) -> Vec<String> {
        self.columns.iter().map(|c| c.resolve(record)).collect()
    }
}

/// Attach the "Change Summary" column to the host's change-log table.
///
/// One-time configuration step, invoked by the host's plugin-loading
/// sequence during application startup, before any table is rendered.
///
/// # Errors
///
/// - `DuplicateColumn` — the summary column was already registered
pub fn register_changelog_columns(table: &mut TableSchema) -> Result<()> {
    let column = change_summary_column();
    let key = column.key.clone();
    table.register_column(column)?;
    info!(table = table.name(), column = %key, "registered change summary column");
    Ok(())
}
