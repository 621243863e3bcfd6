// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and foundational types for sidelight
//!
//! This crate provides the foundational types used across the sidelight
//! workspace:
//!
//! - [`error`] - Error types and Result alias for ingestion-side callers
//! - [`kind`] - Closed classification of JSON runtime categories
//! - [`path`] - Structured node paths with a canonical string form
//! - [`side`] - Left/right designation of the two compared documents

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Error types for comparison ingestion
pub mod error;
/// JSON value classification
pub mod kind;
/// Node path addressing inside a value tree
pub mod path;
/// Left/right side designation
pub mod side;

// Re-exports for convenience
pub use error::{CompareError, Result};
pub use kind::{ValueKind, numbers_equal};
pub use path::{NodePath, PathSegment};
pub use side::Side;
