// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Structural JSON diff
//!
//! Walks two JSON-compatible values in lock-step by structural path and
//! classifies every divergent location as changed, added, or removed.
//!
//! ## Classification
//!
//! - `changed`: the node exists on both sides but differs in kind or
//!   scalar value, or (for arrays) the two sides differ in length
//! - `added`: the node exists only on the second (right) side
//! - `removed`: the node exists only on the first (left) side
//!
//! A kind mismatch or a presence mismatch is terminal: the single recorded
//! path stands for the whole subtree. An array length mismatch is not
//! terminal: the array's own path is recorded as changed and the walk still
//! descends to surface element-level differences. Downstream rendering and
//! summary counts depend on that asymmetry.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sidelight_diff::analyze;
//!
//! let report = analyze(&json!({"name": "X"}), &json!({"name": "Y"}));
//! assert!(!report.is_match);
//! assert_eq!(report.changes.summary().changed, 1);
//! ```
//!
//! The walk is a pure function of its two inputs: no I/O, no shared state,
//! linear in the total node count of both trees.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod analyze;
mod changeset;

pub use analyze::analyze;
pub use changeset::{ChangeSet, DiffReport, Summary};
