//! Snapshot representation and parsing.
//!
//! A snapshot is the host's stored field map for a change record, one per
//! side of the change (`prechange_data` / `postchange_data`). Keys are field
//! names; values are arbitrary JSON. `BTreeMap` keeps iteration order
//! deterministic for downstream diffing and rendering.

use crate::errors::{CdError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field-name to field-value map for one side of a change record.
pub type Snapshot = BTreeMap<String, Value>;

/// Parse a raw stored snapshot value into a typed [`Snapshot`].
///
/// The host stores each side as JSON: `null` for records with no snapshot on
/// that side (e.g. object creation has no pre-change data), an object
/// otherwise.
///
/// # Errors
///
/// - `InvalidSnapshot` — the value is neither `null` nor an object
pub fn parse_snapshot(raw: &Value) -> Result<Option<Snapshot>> {
    match raw {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        )),
        other => Err(CdError::InvalidSnapshot {
            found: json_type_name(other).to_string(),
        }),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
