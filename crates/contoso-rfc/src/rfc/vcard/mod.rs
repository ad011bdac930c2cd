//! vCard 2.1 output and reading.
//!
//! The contacts service answers `text/vcard` requests with a fixed
//! vCard 2.1 block per contact. This module holds the writer for those
//! blocks and a reader that accepts 2.1, 3.0 and 4.0 documents.
//!
//! ## Usage
//!
//! ### Writing
//!
//! ```rust
//! use contoso_core::contact::Contact;
//! use contoso_rfc::rfc::vcard::{EscapePolicy, VcardRecordWriter};
//!
//! let writer = VcardRecordWriter::new(EscapePolicy::Escaped);
//! let body = writer.format_body(&Contact::new("42", "Jane", "Doe").into());
//! assert_eq!(
//!     body,
//!     "BEGIN:VCARD\r\nVERSION:2.1\r\nN:Doe;Jane\r\nFN:Jane Doe\r\nUID:42\r\nEND:VCARD\r\n"
//! );
//! ```
//!
//! ### Reading
//!
//! ```rust
//! use contoso_rfc::rfc::vcard::parse_single;
//!
//! let card = parse_single("BEGIN:VCARD\r\nVERSION:2.1\r\nFN:Jane Doe\r\nEND:VCARD\r\n").unwrap();
//! assert_eq!(card.formatted_name(), Some("Jane Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `StructuredName`, etc.)
//! - [`parse`] - Reader and error types
//! - [`build`] - Writer, escaping and text encodings

pub mod build;
pub mod core;
pub mod parse;


pub use build::{EscapePolicy, TextEncoding, VcardRecordWriter};
pub use core::{StructuredName, VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
