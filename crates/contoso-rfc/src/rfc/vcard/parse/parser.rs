//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{parse_structured_name, unescape_text};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
/// Content outside `BEGIN:VCARD`/`END:VCARD` is ignored.
///
/// ## Errors
/// Returns a parse error if a card is unterminated, lacks a VERSION,
/// declares an unsupported version, or contains a malformed content line.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function returning the first vCard of a document.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            self.pos += 1;

            if line.trim().eq_ignore_ascii_case("BEGIN:VCARD") {
                cards.push(self.parse_vcard()?);
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let mut version = None;
        let mut properties = Vec::new();
        let start_line = self.pos;

        while let Some(&line) = self.lines.get(self.pos) {
            let line_num = self.current_line();
            self.pos += 1;

            if line.trim().eq_ignore_ascii_case("END:VCARD") {
                let version =
                    version.ok_or_else(|| ParseError::missing_property(start_line, "VERSION"))?;
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            let content_line = parse_content_line(line, line_num)?;

            if content_line.name == "VERSION" {
                version = Some(VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?);
            } else {
                properties.push(Self::convert_to_property(content_line));
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }

    fn convert_to_property(line: ContentLine) -> VCardProperty {
        let value = match line.name.as_str() {
            "N" => VCardValue::StructuredName(parse_structured_name(&line.value)),
            _ => VCardValue::Text(unescape_text(&line.value)),
        };

        VCardProperty {
            group: line.group,
            name: line.name,
            params: line.params,
            value,
            raw_value: line.value,
        }
    }
}
