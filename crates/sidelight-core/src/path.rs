// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structured node paths with a canonical string form.
//!
//! A [`NodePath`] addresses one location inside a JSON value tree. Paths are
//! the sole key used to correlate findings between the two compared trees
//! and between a change set and the renderer, so both components build them
//! through the same [`child`](NodePath::child) / [`index`](NodePath::index)
//! constructors.
//!
//! # Canonical form
//!
//! - the root is the empty string;
//! - object member access appends `.key` (the first key segment renders
//!   bare, without a leading dot);
//! - array element access appends `[index]`.
//!
//! So `users[2].name` addresses the `name` member of the third element of
//! the top-level `users` array. Historically the literal `"[]"` was used to
//! flag the root when the root itself is an array; [`NodePath`] has a single
//! root value, and parsing accepts both `""` and `"[]"` as that root, which
//! makes the two designators equivalent by construction.
//!
//! Canonical strings are unambiguous only for keys that contain no `.` or
//! `[`. Set identity always uses the structured segments, never the string,
//! so exotic keys only affect display and round-tripping through text.

use crate::error::CompareError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// One step of a node path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Object member access by key
    Key(String),
    /// Array element access by zero-based index
    Index(usize),
}

/// Address of a node within a JSON value tree.
///
/// Ordered and hashable so it can key the change sets directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath {
    segments: SmallVec<[PathSegment; 8]>,
}

impl NodePath {
    /// The root path (no segments).
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: SmallVec::new_const(),
        }
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Path of the object member `key` under this path.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        Self { segments }
    }

    /// Path of the array element `index` under this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = CompareError;

    /// Parse a canonical path string. `""` and the legacy root-array marker
    /// `"[]"` both yield the root path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "[]" {
            return Ok(Self::root());
        }

        let invalid = |reason| CompareError::InvalidPath {
            input: s.to_owned(),
            reason,
        };

        let mut segments = SmallVec::new();
        let mut rest = s;
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix('[') {
                let Some(end) = tail.find(']') else {
                    return Err(invalid("unterminated index segment"));
                };
                let index = tail[..end]
                    .parse::<usize>()
                    .map_err(|_| invalid("index segment is not a number"))?;
                segments.push(PathSegment::Index(index));
                rest = &tail[end + 1..];
                // only ".", "[", or the end may follow an index segment
                if !rest.is_empty() && !rest.starts_with('.') && !rest.starts_with('[') {
                    return Err(invalid("missing separator after index segment"));
                }
            } else {
                let end = rest.find(['.', '[']).unwrap_or(rest.len());
                if end == 0 {
                    return Err(invalid("empty key segment"));
                }
                segments.push(PathSegment::Key(rest[..end].to_owned()));
                rest = &rest[end..];
            }

            if let Some(tail) = rest.strip_prefix('.') {
                if tail.is_empty() || tail.starts_with('.') || tail.starts_with('[') {
                    return Err(invalid("empty key segment"));
                }
                rest = tail;
            }
        }

        Ok(Self { segments })
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
