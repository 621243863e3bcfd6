// SPDX-License-Identifier: MIT OR Apache-2.0
//! # sidelight-cli
//!
//! Command-line interface for sidelight - structural JSON comparison with
//! annotated side-by-side output.
//!
//! ## Usage
//!
//! ```bash
//! # Compare two JSON files, print the summary and both renderings
//! sidelight left.json right.json
//!
//! # Only one side
//! sidelight --side right left.json right.json
//!
//! # Counts only
//! sidelight --summary-only left.json right.json
//!
//! # Machine-readable report
//! sidelight --json left.json right.json
//!
//! # Sanitize before comparing: drop nulls, strip ".000" time fractions,
//! # and ignore a bookkeeping field everywhere
//! sidelight --ignore-field report_id left.json right.json
//! ```
//!
//! Exit status: 0 when the documents match, 1 when they differ, 2 on
//! ingestion errors (unreadable or unparsable input).
//!
//! The comparison core never sees malformed input: parse failures are
//! reported per side before `analyze` is reached. The sanitation pass in
//! [`sanitize`] is likewise a caller-side concern; the core performs no
//! field filtering of its own.
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access use the
//! constituent library crates directly:
//!
//! - [`sidelight`](https://docs.rs/sidelight) - Umbrella crate
//! - [`sidelight-diff`](https://docs.rs/sidelight-diff) - The differencer
//! - [`sidelight-render`](https://docs.rs/sidelight-render) - The renderer
//! - [`sidelight-core`](https://docs.rs/sidelight-core) - Core types

#![warn(missing_docs)]

/// Caller-side sanitation pass applied before comparison.
pub mod sanitize;

/// Re-export of sidelight-diff for diff functionality.
pub use sidelight_diff as diff;

/// Re-export of sidelight-render for rendering functionality.
pub use sidelight_render as render;

/// Re-export of sidelight-core for core types.
pub use sidelight_core as core;
