//! chdiff-core - Snapshot diffing for object change records
//!
//! This crate provides the pure computation behind the "Change Summary"
//! display column of a change-log table:
//! - Snapshot parsing from the raw JSON the host stores per change record
//! - A structured, deterministic diff between a pre-change and a post-change
//!   snapshot (added / removed / updated fields)
//! - A human-readable one-line summary rendered from that diff
//!
//! No I/O, no shared state; every entry point is a pure function over the
//! supplied snapshots.

pub mod diff;
pub mod errors;
pub mod snapshot;

// Re-export commonly used types
pub use diff::engine::compute_diff;
pub use diff::human_summary::{format_summary, render_human_summary, NO_CHANGES_SENTINEL};
pub use diff::model::{ChangeDiff, DiffClassification, FieldChange};
pub use errors::{CdError, Result};
pub use snapshot::{parse_snapshot, Snapshot};
