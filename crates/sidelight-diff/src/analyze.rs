// SPDX-License-Identifier: MIT OR Apache-2.0
//! The recursive lock-step walk over two value trees.

use crate::changeset::{ChangeSet, DiffReport};
use serde_json::{Map, Value};
use sidelight_core::{NodePath, ValueKind, numbers_equal};

/// Compare two values and classify every divergent path.
///
/// `is_match` is true iff the two trees are structurally identical under
/// exact scalar equality. Deterministic for identical inputs; visits each
/// node of both trees once.
#[must_use]
pub fn analyze(left: &Value, right: &Value) -> DiffReport {
    let mut changes = ChangeSet::default();
    walk(Some(left), Some(right), &NodePath::root(), &mut changes);
    DiffReport {
        is_match: changes.is_empty(),
        changes,
    }
}

fn walk(
    left: Option<&Value>,
    right: Option<&Value>,
    path: &NodePath,
    changes: &mut ChangeSet,
) {
    match (left, right) {
        (None, None) => {}
        (None, Some(_)) => {
            // the single path stands for the whole missing subtree
            changes.added.insert(path.clone());
        }
        (Some(_), None) => {
            changes.removed.insert(path.clone());
        }
        (Some(l), Some(r)) => {
            if ValueKind::classify(left) != ValueKind::classify(right) {
                // kind mismatch subsumes the subtree
                changes.changed.insert(path.clone());
                return;
            }
            match (l, r) {
                (Value::Object(lo), Value::Object(ro)) => walk_objects(lo, ro, path, changes),
                (Value::Array(la), Value::Array(ra)) => walk_arrays(la, ra, path, changes),
                _ => {
                    if !scalars_equal(l, r) {
                        changes.changed.insert(path.clone());
                    }
                }
            }
        }
    }
}

fn walk_objects(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &NodePath,
    changes: &mut ChangeSet,
) {
    // union of keys: left's keys first, then right-only keys; a key missing
    // on one side surfaces as added/removed at the child path
    for key in left.keys() {
        walk(left.get(key), right.get(key), &path.child(key), changes);
    }
    for key in right.keys() {
        if !left.contains_key(key) {
            walk(None, right.get(key), &path.child(key), changes);
        }
    }
}

fn walk_arrays(left: &[Value], right: &[Value], path: &NodePath, changes: &mut ChangeSet) {
    // a length mismatch flags the array itself but does NOT suppress
    // element-wise comparison
    if left.len() != right.len() {
        changes.changed.insert(path.clone());
    }
    for index in 0..left.len().max(right.len()) {
        walk(left.get(index), right.get(index), &path.index(index), changes);
    }
}

fn scalars_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        // containers are handled by the caller
        _ => false,
    }
}
