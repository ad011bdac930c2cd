//! vCard text escaping.

use std::borrow::Cow;

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon. Carriage returns are dropped.
#[must_use]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '\n', '\r', ',', ';']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {} // Skip CR (use \n for newlines)
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}
