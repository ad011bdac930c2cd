//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use contoso_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N:Doe;Jane\r\n\
//! FN:Jane Doe\r\n\
//! UID:42\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].uid(), Some("42"));
//! ```
//!
//! ## Features
//!
//! - Accepts vCard 2.1, 3.0 and 4.0
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL)
//! - Bare 2.1 type parameters (`TEL;HOME:`) become `TYPE=HOME`
//! - Structured N values, split on unescaped semicolons

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::{parse_structured_name, split_component, split_structured, unescape_text};
