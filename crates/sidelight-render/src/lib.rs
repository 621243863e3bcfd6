// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Annotated JSON rendering
//!
//! Serializes one side of a comparison as indented, HTML-safe markup in
//! which every node is wrapped in the highlight resolved from a previously
//! computed [`ChangeSet`](sidelight_diff::ChangeSet) and the side being
//! rendered.
//!
//! ## Highlight resolution
//!
//! For a node's path, in order:
//!
//! 1. in `changed` → `diff-changed` (both sides);
//! 2. side is left and path in `removed` → `diff-removed`;
//! 3. side is right and path in `added` → `diff-added`;
//! 4. otherwise no highlight.
//!
//! The left side is the perspective that still holds a removed node, so
//! `removed` only paints the left rendering; symmetrically `added` only
//! paints the right one.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sidelight_diff::analyze;
//! use sidelight_render::{Side, render};
//!
//! let left = json!({"name": "X"});
//! let right = json!({"name": "Y"});
//! let report = analyze(&left, &right);
//! let markup = render(&left, &report.changes, Side::Left);
//! assert!(markup.contains("diff-changed"));
//! ```
//!
//! Output is already escaped; consumers embed it verbatim and must not
//! escape it again.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod highlight;
mod markup;
mod render;

pub use highlight::{Highlight, resolve_highlight};
pub use markup::escape_html;
pub use render::render;
pub use sidelight_core::Side;
