// SPDX-License-Identifier: MIT OR Apache-2.0
//! The render recursion: indented serialization with per-node highlights.

use crate::highlight::resolve_highlight;
use crate::markup::{escape_html, strip_leading_indent, wrap_highlight};
use serde_json::{Map, Value};
use sidelight_core::{NodePath, Side};
use sidelight_diff::ChangeSet;

const INDENT: &str = "  ";

/// Borrowed rendering context threaded through the recursion. No global
/// state: each invocation only reads its inputs.
struct RenderContext<'a> {
    side: Side,
    changes: &'a ChangeSet,
}

/// Render `value` as indented, HTML-safe markup with every node wrapped in
/// the highlight resolved from `changes` and `side`.
///
/// Total over well-formed values: never fails, including for empty
/// containers, `null`, and deeply nested structures.
#[must_use]
pub fn render(value: &Value, changes: &ChangeSet, side: Side) -> String {
    let context = RenderContext { side, changes };
    render_value(value, &NodePath::root(), &context, 0)
}

fn render_value(
    value: &Value,
    path: &NodePath,
    context: &RenderContext<'_>,
    depth: usize,
) -> String {
    let highlight = resolve_highlight(path, context.side, context.changes);
    let body = match value {
        Value::Object(members) => render_object(members, path, context, depth),
        Value::Array(items) => render_array(items, path, context, depth),
        scalar => format!("{}{}", indent(depth), escape_html(&scalar.to_string())),
    };
    wrap_highlight(body, highlight)
}

fn render_object(
    members: &Map<String, Value>,
    path: &NodePath,
    context: &RenderContext<'_>,
    depth: usize,
) -> String {
    let pad = indent(depth);
    if members.is_empty() {
        return format!("{pad}{{}}");
    }

    let member_pad = indent(depth + 1);
    let mut lines = vec![format!("{pad}{{")];
    // iteration order is the value's own key insertion order
    for (position, (key, member)) in members.iter().enumerate() {
        let member_path = path.child(key);
        let rendered = render_value(member, &member_path, context, depth + 1);
        let comma = if position + 1 < members.len() { "," } else { "" };
        let line = format!(
            "{member_pad}<span class=\"json-key\">\"{}\"</span>: {}{comma}",
            escape_html(key),
            strip_leading_indent(&rendered),
        );
        // the member line wraps the value's own highlight, so line-level
        // marks take visual precedence
        lines.push(wrap_highlight(
            line,
            resolve_highlight(&member_path, context.side, context.changes),
        ));
    }
    lines.push(format!("{pad}}}"));
    lines.join("\n")
}

fn render_array(
    items: &[Value],
    path: &NodePath,
    context: &RenderContext<'_>,
    depth: usize,
) -> String {
    let pad = indent(depth);
    if items.is_empty() {
        return format!("{pad}[]");
    }

    let item_pad = indent(depth + 1);
    let mut lines = vec![format!("{pad}[")];
    for (position, item) in items.iter().enumerate() {
        let item_path = path.index(position);
        let rendered = render_value(item, &item_path, context, depth + 1);
        let comma = if position + 1 < items.len() { "," } else { "" };
        let line = format!("{item_pad}{}{comma}", strip_leading_indent(&rendered));
        lines.push(wrap_highlight(
            line,
            resolve_highlight(&item_path, context.side, context.changes),
        ));
    }
    lines.push(format!("{pad}]"));
    lines.join("\n")
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changes() -> ChangeSet {
        ChangeSet::default()
    }

    #[test]
    fn test_scalars_render_as_json_literals() {
        for (value, expected) in [
            (json!(null), "null"),
            (json!(true), "true"),
            (json!(42), "42"),
            (json!("x"), "&quot;x&quot;"),
        ] {
            assert_eq!(render(&value, &changes(), Side::Left), expected);
        }
    }

    #[test]
    fn test_empty_containers_render_on_one_line() {
        assert_eq!(render(&json!({}), &changes(), Side::Left), "{}");
        assert_eq!(render(&json!([]), &changes(), Side::Left), "[]");
    }

    #[test]
    fn test_object_layout() {
        let value = json!({"a": 1, "b": "x"});
        let markup = render(&value, &changes(), Side::Left);
        let expected = "{\n  <span class=\"json-key\">\"a\"</span>: 1,\n  <span class=\"json-key\">\"b\"</span>: &quot;x&quot;\n}";
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_array_layout() {
        let markup = render(&json!([1, 2]), &changes(), Side::Left);
        assert_eq!(markup, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_nested_value_is_spliced_without_duplicate_indent() {
        let value = json!({"a": {"b": 1}});
        let markup = render(&value, &changes(), Side::Left);
        let expected = "{\n  <span class=\"json-key\">\"a\"</span>: {\n    <span class=\"json-key\">\"b\"</span>: 1\n  }\n}";
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_changed_highlight_paints_both_sides() {
        let mut changes = ChangeSet::default();
        changes.changed.insert(NodePath::root().child("a"));
        let value = json!({"a": 1});
        for side in [Side::Left, Side::Right] {
            let markup = render(&value, &changes, side);
            assert!(markup.contains("diff-changed"), "missing mark on {side}");
        }
    }

    #[test]
    fn test_removed_highlight_paints_left_only() {
        let mut changes = ChangeSet::default();
        changes.removed.insert(NodePath::root().child("a"));
        let value = json!({"a": 1});
        assert!(render(&value, &changes, Side::Left).contains("diff-removed"));
        assert!(!render(&value, &changes, Side::Right).contains("diff-removed"));
    }

    #[test]
    fn test_member_line_wraps_value_highlight() {
        let mut changes = ChangeSet::default();
        changes.changed.insert(NodePath::root().child("a"));
        let markup = render(&json!({"a": 1}), &changes, Side::Left);
        // both the member line and the inline value are wrapped; the line
        // wrapper is the outer one
        let line = "<span class=\"diff-changed\">  <span class=\"json-key\">\"a\"</span>: <span class=\"diff-changed\">1</span></span>";
        assert!(markup.contains(line), "unexpected markup: {markup}");
    }

    #[test]
    fn test_highlighted_container_keeps_opening_tag_when_spliced() {
        let mut changes = ChangeSet::default();
        changes.changed.insert(NodePath::root().child("a"));
        let markup = render(&json!({"a": {"b": 1}}), &changes, Side::Right);
        assert!(
            markup.contains(": <span class=\"diff-changed\">{"),
            "span opening lost in {markup}"
        );
    }

    #[test]
    fn test_root_array_length_mark() {
        let mut changes = ChangeSet::default();
        changes.changed.insert(NodePath::root());
        let markup = render(&json!([1, 2]), &changes, Side::Left);
        assert!(markup.starts_with("<span class=\"diff-changed\">["));
    }

    #[test]
    fn test_empty_container_still_gets_own_highlight() {
        let mut changes = ChangeSet::default();
        changes.added.insert(NodePath::root().child("a"));
        let markup = render(&json!({"a": {}}), &changes, Side::Right);
        assert!(markup.contains("<span class=\"diff-added\">"));
        assert!(markup.contains("{}"));
    }

    #[test]
    fn test_string_values_are_escaped() {
        let markup = render(&json!({"a": "<b>&'\""}), &changes(), Side::Left);
        assert!(markup.contains("&lt;b&gt;&amp;&#39;"));
        assert!(!markup.contains("<b>"));
    }
}
