// SPDX-License-Identifier: MIT OR Apache-2.0
//! HTML-safe markup helpers: escaping, highlight wrappers, and the
//! indent-splicing rule for inline values.

use crate::highlight::Highlight;

/// Escape `& < > " '` for safe embedding in markup.
///
/// Consumers must treat rendered output as already escaped and must not
/// escape it a second time.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap `content` in a highlight span, or return it unchanged when there is
/// no highlight to apply.
pub(crate) fn wrap_highlight(content: String, highlight: Option<Highlight>) -> String {
    match highlight {
        Some(class) => format!("<span class=\"{}\">{content}</span>", class.css_class()),
        None => content,
    }
}

/// Strip the leading indentation a recursive rendering carries so it can be
/// spliced inline after a key. The indentation may sit either at the very
/// start or immediately inside a leading span opening tag; the tag itself
/// must survive.
pub(crate) fn strip_leading_indent(rendered: &str) -> String {
    let trimmed = rendered.trim_start_matches([' ', '\t']);
    if trimmed.len() != rendered.len() {
        return trimmed.to_owned();
    }

    if let Some(tail) = rendered.strip_prefix("<span")
        && let Some(close) = tail.find('>')
    {
        let (opening, body) = rendered.split_at("<span".len() + close + 1);
        let stripped = body.trim_start_matches([' ', '\t']);
        if stripped.len() != body.len() {
            return format!("{opening}{stripped}");
        }
    }

    rendered.to_owned()
}
