//! vCard value parsers.

use crate::rfc::vcard::core::StructuredName;

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&next) if matches!(next, ',' | ';' | '\\') => {
                chars.next();
                result.push(next);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Escape sequences are left in place for the component parser.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas and unescapes each part.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in s.chars() {
        if escaped {
            current.push('\\');
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ',' {
            parts.push(unescape_text(&std::mem::take(&mut current)));
        } else {
            current.push(c);
        }
    }
    if escaped {
        current.push('\\');
    }
    parts.push(unescape_text(&current));

    parts
}

/// Parses a structured name (N property).
///
/// Format: `family;given;additional;prefixes;suffixes`. vCard 2.1 writers
/// often emit only the first two components; missing ones are empty.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let mut parts = split_structured(value).into_iter().map(split_component);

    StructuredName {
        family: parts.next().unwrap_or_default(),
        given: parts.next().unwrap_or_default(),
        additional: parts.next().unwrap_or_default(),
        prefixes: parts.next().unwrap_or_default(),
        suffixes: parts.next().unwrap_or_default(),
    }
}
