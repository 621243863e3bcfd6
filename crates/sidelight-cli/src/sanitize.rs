// SPDX-License-Identifier: MIT OR Apache-2.0
//! Caller-side sanitation of parsed documents before comparison.
//!
//! Comparison inputs often carry noise that is not worth reporting:
//! bookkeeping identifiers that are regenerated on every export, `null`
//! members emitted for absent data, and timestamps whose only difference
//! is a zero-millisecond fraction (`10:00:00.000Z` vs `10:00:00Z`). This
//! pass strips that noise recursively. The comparison core assumes it has
//! already run and performs no filtering of its own.

use serde_json::{Map, Value};

/// What the sanitation pass removes.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Object members with these keys are dropped everywhere
    pub ignored_fields: Vec<String>,
    /// Drop `null` object members and `null` array elements
    pub drop_nulls: bool,
    /// Strip `.000` / `.000Z` time fractions from string scalars
    pub strip_zero_millis: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            ignored_fields: Vec::new(),
            drop_nulls: true,
            strip_zero_millis: true,
        }
    }
}

/// Sanitize a parsed value. Returns `None` when the value itself is
/// dropped (a `null` under [`SanitizeOptions::drop_nulls`]); containers are
/// rebuilt with their surviving members only.
#[must_use]
pub fn sanitize(value: &Value, options: &SanitizeOptions) -> Option<Value> {
    match value {
        Value::Null if options.drop_nulls => None,
        Value::Array(items) => Some(Value::Array(
            items
                .iter()
                .filter_map(|item| sanitize(item, options))
                .collect(),
        )),
        Value::Object(members) => {
            let mut kept = Map::new();
            for (key, member) in members {
                if options.ignored_fields.iter().any(|field| field == key) {
                    continue;
                }
                if let Some(clean) = sanitize(member, options) {
                    kept.insert(key.clone(), clean);
                }
            }
            Some(Value::Object(kept))
        }
        Value::String(text) if options.strip_zero_millis => {
            Some(Value::String(strip_zero_millis(text)))
        }
        other => Some(other.clone()),
    }
}

/// Remove zero-millisecond time fractions at word boundaries: `.000Z`
/// disappears together with its zone marker, a trailing `.000` disappears
/// alone. `10:00:00.000Z` becomes `10:00:00`, while `1.0001` is untouched.
fn strip_zero_millis(text: &str) -> String {
    if !text.contains(".000") {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(position) = rest.find(".000") {
        let after = &rest[position + 4..];
        if let Some(tail) = after.strip_prefix('Z')
            && !starts_with_word_char(tail)
        {
            out.push_str(&rest[..position]);
            rest = tail;
        } else if !starts_with_word_char(after) {
            out.push_str(&rest[..position]);
            rest = after;
        } else {
            out.push_str(&rest[..position + 4]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn starts_with_word_char(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
