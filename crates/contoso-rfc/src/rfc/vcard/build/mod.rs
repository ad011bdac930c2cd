//! vCard serialization.
//!
//! ## Features
//!
//! - Fixed vCard 2.1 block per contact (`N`, `FN`, `UID`)
//! - CRLF on every line
//! - Optional text escaping of interpolated fields
//! - UTF-8 and UTF-16 output encodings

mod encoding;
mod escape;
mod writer;

pub use encoding::TextEncoding;
pub use escape::escape_text;
pub use writer::{EscapePolicy, VcardRecordWriter};
