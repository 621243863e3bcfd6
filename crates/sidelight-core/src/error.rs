// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for comparison ingestion.
//!
//! The comparison core itself is total over well-formed values and never
//! fails. These errors belong to the callers that feed it: reading and
//! decoding the two input documents, and parsing canonical path strings
//! back into [`NodePath`](crate::path::NodePath) values.

use crate::side::Side;
use thiserror::Error;

/// Result alias using [`CompareError`].
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors surfaced while preparing inputs for a comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    /// An input document could not be read.
    #[error("failed to read {side} input: {source}")]
    Io {
        /// Which input failed
        side: Side,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An input document was not valid JSON. Records in this state must
    /// never reach the differencer; callers report them instead.
    #[error("{side} input is not valid JSON: {source}")]
    Parse {
        /// Which input failed
        side: Side,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A canonical path string could not be parsed.
    #[error("invalid node path {input:?}: {reason}")]
    InvalidPath {
        /// The offending path string
        input: String,
        /// What made it invalid
        reason: &'static str,
    },
}
