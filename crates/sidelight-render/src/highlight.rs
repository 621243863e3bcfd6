// SPDX-License-Identifier: MIT OR Apache-2.0
//! Highlight classes and their resolution from a change set.

use sidelight_core::{NodePath, Side};
use sidelight_diff::ChangeSet;

/// Presentation annotation attached to a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Present on both sides in differing form
    Changed,
    /// Present only on the right side
    Added,
    /// Present only on the left side
    Removed,
}

impl Highlight {
    /// CSS class emitted for this highlight.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Changed => "diff-changed",
            Self::Added => "diff-added",
            Self::Removed => "diff-removed",
        }
    }
}

/// Resolve the highlight for `path` when rendering `side`.
///
/// `changed` wins over `added`/`removed`; the latter two only paint the
/// side on which the node actually exists. The root path needs no special
/// casing here: both historical root designators parse to the same
/// [`NodePath`], so membership tests are equivalence-correct.
#[must_use]
pub fn resolve_highlight(path: &NodePath, side: Side, changes: &ChangeSet) -> Option<Highlight> {
    if changes.changed.contains(path) {
        return Some(Highlight::Changed);
    }
    match side {
        Side::Left if changes.removed.contains(path) => Some(Highlight::Removed),
        Side::Right if changes.added.contains(path) => Some(Highlight::Added),
        _ => None,
    }
}
