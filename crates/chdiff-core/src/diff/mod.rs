//! Change-record diff engine.
//!
//! Compares the pre-change and post-change snapshots of one change record
//! and produces a structured, deterministic diff plus a human-readable
//! one-line summary for display in the change-log table.
//!
//! ## Entry point
//!
//! ```ignore
//! use chdiff_core::diff::engine::compute_diff;
//!
//! let diff = compute_diff(pre.as_ref(), post.as_ref());
//! let summary = chdiff_core::diff::human_summary::render_human_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diff output; all
//!   collections iterate in key order.
//! - **Purity**: no I/O, no shared state; safe to invoke per row from
//!   concurrent rendering.
//! - **Non-empty summary**: the rendered summary is never empty — absent,
//!   empty, or identical snapshots yield a fixed sentinel string.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compute_diff;
pub use human_summary::{format_summary, render_human_summary};
pub use model::ChangeDiff;
