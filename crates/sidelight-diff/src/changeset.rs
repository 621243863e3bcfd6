// SPDX-License-Identifier: MIT OR Apache-2.0
//! Change sets and the diff report.

use serde::{Deserialize, Serialize};
use sidelight_core::NodePath;
use std::collections::BTreeSet;

/// Three disjoint sets of paths produced by comparing two values.
///
/// A given path appears in at most one of the three sets: once a path is
/// classified as changed, its descendants are never separately visited.
/// The sets are ordered for deterministic serialization; no consumer may
/// rely on any particular ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Paths present on both sides with differing kind, scalar value, or
    /// array length
    pub changed: BTreeSet<NodePath>,
    /// Paths present only on the right side
    pub added: BTreeSet<NodePath>,
    /// Paths present only on the left side
    pub removed: BTreeSet<NodePath>,
}

impl ChangeSet {
    /// Whether all three sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }

    /// Per-class cardinalities, for summary display.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            changed: self.changed.len(),
            added: self.added.len(),
            removed: self.removed.len(),
        }
    }
}

/// Per-class counts of diverging paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of changed paths
    pub changed: usize,
    /// Number of added paths
    pub added: usize,
    /// Number of removed paths
    pub removed: usize,
}

/// Outcome of comparing two values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// True iff all three change sets are empty
    pub is_match: bool,
    /// The classified divergences
    pub changes: ChangeSet,
}
