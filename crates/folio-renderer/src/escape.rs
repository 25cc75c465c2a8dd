//! HTML entity escaping.

use std::borrow::Cow;

/// Escape HTML-special characters in text.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with entity references in a
/// single pass, so already-produced entities are never re-escaped.
/// Total over any input; an empty string escapes to an empty string.
///
/// Borrows when the input needs no escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
