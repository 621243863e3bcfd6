// SPDX-License-Identifier: MIT OR Apache-2.0
//! # sidelight
//!
//! Structural comparison of two JSON-compatible documents with annotated,
//! side-by-side renderable output.
//!
//! Two components are consumed in sequence:
//!
//! 1. [`analyze`] walks both values in lock-step by structural path and
//!    classifies every divergent path as changed, added, or removed;
//! 2. [`render`] serializes one side as indented, HTML-safe markup with
//!    every node wrapped in the highlight resolved from the change set and
//!    the side being rendered.
//!
//! ## Quick start
//!
//! ```
//! use serde_json::json;
//! use sidelight::{Side, analyze, render};
//!
//! let left = json!({"id": 1, "name": "X"});
//! let right = json!({"id": 1, "name": "Y", "extra": true});
//!
//! let report = analyze(&left, &right);
//! assert!(!report.is_match);
//!
//! let left_view = render(&left, &report.changes, Side::Left);
//! let right_view = render(&right, &report.changes, Side::Right);
//! assert!(left_view.contains("diff-changed"));
//! assert!(right_view.contains("diff-added"));
//! ```
//!
//! Both calls are pure and total over well-formed values: no I/O, no
//! shared state, no failure modes, linear in total node count. They may be
//! invoked concurrently from independent call sites without coordination.
//!
//! ## Constituent crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`sidelight-core`](https://docs.rs/sidelight-core) | Node paths, value kinds, sides, errors |
//! | [`sidelight-diff`](https://docs.rs/sidelight-diff) | The differencer |
//! | [`sidelight-render`](https://docs.rs/sidelight-render) | The annotated renderer |

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Re-export of sidelight-core for foundational types.
pub use sidelight_core as core;

/// Re-export of sidelight-diff for the differencer.
pub use sidelight_diff as diff;

/// Re-export of sidelight-render for the annotated renderer.
pub use sidelight_render as renderer;

pub use sidelight_core::{CompareError, NodePath, PathSegment, Side, ValueKind};
pub use sidelight_diff::{ChangeSet, DiffReport, Summary, analyze};
pub use sidelight_render::{Highlight, escape_html, render, resolve_highlight};
