//! HTML text escaping.
//!
//! Produces exactly what a browser serializes for a text node's content,
//! so the result can be dropped into markup without being parsed as tags.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `text` the way `innerHTML` serializes a text node.
///
/// `&`, `<`, `>` and non-breaking spaces are replaced; quotes are kept, so
/// the result is safe for element content, not attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}
