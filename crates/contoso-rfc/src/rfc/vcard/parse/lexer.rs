//! vCard lexer for line unfolding and content line parsing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Unfolds a vCard document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab.
/// Also handles bare LF for lenient parsing. Logical lines are
/// separated by a single `\n` in the result.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                push_line_break(&mut chars, &mut result);
            }
            '\n' => push_line_break(&mut chars, &mut result),
            _ => result.push(c),
        }
    }

    result
}

fn push_line_break(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, result: &mut String) {
    if matches!(chars.peek(), Some(' ' | '\t')) {
        chars.next(); // continuation
    } else {
        result.push('\n');
    }
}

/// Splits unfolded input into non-empty logical lines.
#[must_use]
pub fn split_lines(unfolded: &str) -> Vec<&str> {
    unfolded
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let name_params = &line[..colon_pos];
    let value = &line[colon_pos + 1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    // Only a dot before the first parameter can introduce a group
    let head = s.split(';').next().unwrap_or(s);
    if let Some((group, rest_of_name)) = head.split_once('.')
        && !group.is_empty()
        && group.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !rest_of_name.is_empty()
    {
        return (Some(group), &s[group.len() + 1..]);
    }
    (None, s)
}

/// Splits the parameter section on unquoted semicolons.
fn split_params(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);

    parts
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();

    for raw in split_params(s) {
        if raw.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                "empty parameter",
            ));
        }

        let param = match raw.split_once('=') {
            Some((name, values)) if !name.is_empty() => {
                VCardParameter::multi(name, parse_param_values(values))
            }
            Some(_) => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameter,
                    line_num,
                    format!("parameter without name: {raw}"),
                ));
            }
            // vCard 2.1 bare type, e.g. TEL;HOME;VOICE:
            None => VCardParameter::type_param(raw),
        };
        params.push(param);
    }

    Ok(params)
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in s.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);

    values
}
