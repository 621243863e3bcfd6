// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests for the differencer.

use proptest::prelude::*;
use serde_json::Value;
use sidelight_diff::analyze;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

proptest! {
    /// A value always matches itself, with all three sets empty.
    #[test]
    fn identity_always_matches(value in arb_value()) {
        let report = analyze(&value, &value);
        prop_assert!(report.is_match);
        prop_assert!(report.changes.is_empty());
    }

    /// Swapping the arguments exchanges `added` and `removed` and leaves
    /// `changed` identical.
    #[test]
    fn swap_exchanges_added_and_removed(
        left in arb_value(),
        right in arb_value(),
    ) {
        let forward = analyze(&left, &right);
        let backward = analyze(&right, &left);
        prop_assert_eq!(&forward.changes.added, &backward.changes.removed);
        prop_assert_eq!(&forward.changes.removed, &backward.changes.added);
        prop_assert_eq!(&forward.changes.changed, &backward.changes.changed);
        prop_assert_eq!(forward.is_match, backward.is_match);
    }

    /// Every path lands in at most one of the three sets.
    #[test]
    fn sets_are_disjoint(left in arb_value(), right in arb_value()) {
        let changes = analyze(&left, &right).changes;
        prop_assert!(changes.changed.is_disjoint(&changes.added));
        prop_assert!(changes.changed.is_disjoint(&changes.removed));
        prop_assert!(changes.added.is_disjoint(&changes.removed));
    }

    /// Rerunning on identical inputs is deterministic.
    #[test]
    fn reruns_are_deterministic(left in arb_value(), right in arb_value()) {
        prop_assert_eq!(analyze(&left, &right), analyze(&left, &right));
    }
}
