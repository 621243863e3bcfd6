// SPDX-License-Identifier: MIT OR Apache-2.0
//! Closed classification of JSON runtime categories.
//!
//! Both the differencer and the renderer dispatch on [`ValueKind`] instead
//! of inspecting values ad hoc. `Absent` stands for a location that does
//! not exist on one side: a missing object key, or an array index beyond
//! that side's length.

use serde_json::{Number, Value};

/// The runtime category of a value at a given path, including absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The location does not exist on this side
    Absent,
    /// JSON null
    Null,
    /// JSON boolean
    Bool,
    /// JSON number
    Number,
    /// JSON string
    String,
    /// JSON object
    Object,
    /// JSON array
    Array,
}

impl ValueKind {
    /// Classify an optionally-present value.
    #[must_use]
    pub const fn classify(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Object(_)) => Self::Object,
            Some(Value::Array(_)) => Self::Array,
        }
    }

    /// Whether this kind has children to recurse into.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// Whether this kind is a leaf (null counts as a scalar).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_container() && !matches!(self, Self::Absent)
    }
}

/// Exact numeric equality across integer and float representations.
///
/// Same-representation integers compare directly; mixed representations
/// compare by exact `f64` value, so `1` equals `1.0` but `1` does not
/// equal `1.1`. No tolerance is applied.
#[must_use]
#[allow(clippy::float_cmp)] // exact equality is the contract
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert_eq!(ValueKind::classify(None), ValueKind::Absent);
        assert_eq!(ValueKind::classify(Some(&Value::Null)), ValueKind::Null);
        assert_eq!(ValueKind::classify(Some(&json!(true))), ValueKind::Bool);
        assert_eq!(ValueKind::classify(Some(&json!(1.5))), ValueKind::Number);
        assert_eq!(ValueKind::classify(Some(&json!("x"))), ValueKind::String);
        assert_eq!(ValueKind::classify(Some(&json!({}))), ValueKind::Object);
        assert_eq!(ValueKind::classify(Some(&json!([]))), ValueKind::Array);
    }

    #[test]
    fn test_string_and_number_are_distinct_kinds() {
        assert_ne!(
            ValueKind::classify(Some(&json!("1"))),
            ValueKind::classify(Some(&json!(1)))
        );
    }

    #[test]
    fn test_container_and_scalar_predicates() {
        assert!(ValueKind::Object.is_container());
        assert!(ValueKind::Array.is_container());
        assert!(ValueKind::Null.is_scalar());
        assert!(!ValueKind::Absent.is_scalar());
        assert!(!ValueKind::Absent.is_container());
    }

    #[test]
    fn test_numbers_equal_across_representations() {
        let one_int = json!(1);
        let one_float = json!(1.0);
        let (Value::Number(a), Value::Number(b)) = (&one_int, &one_float) else {
            panic!("expected numbers");
        };
        assert!(numbers_equal(a, b));
        assert!(numbers_equal(a, a));
    }

    #[test]
    fn test_numbers_not_equal() {
        let a = json!(1);
        let b = json!(1.1);
        let (Value::Number(a), Value::Number(b)) = (&a, &b) else {
            panic!("expected numbers");
        };
        assert!(!numbers_equal(a, b));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let a = json!(u64::MAX);
        let b = json!(u64::MAX - 1);
        let (Value::Number(a), Value::Number(b)) = (&a, &b) else {
            panic!("expected numbers");
        };
        assert!(!numbers_equal(a, b));
        assert!(numbers_equal(a, a));
    }
}
