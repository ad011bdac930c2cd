//! Contact to vCard 2.1 writer.

use std::borrow::Cow;

use contoso_core::contact::Contact;
use contoso_core::types::{ContactPayload, PayloadKind};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::encoding::TextEncoding;
use super::escape::escape_text;

const CRLF: &str = "\r\n";

/// How contact fields are placed into the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePolicy {
    /// Escape `\`, `;`, `,` and newlines before interpolation.
    #[default]
    Escaped,
    /// Interpolate fields verbatim. A `;` in a last name breaks the N line.
    Literal,
}

impl EscapePolicy {
    #[must_use]
    pub const fn from_escape_fields(escape_fields: bool) -> Self {
        if escape_fields {
            Self::Escaped
        } else {
            Self::Literal
        }
    }
}

/// Writes contacts as vCard 2.1 blocks.
///
/// Each contact becomes:
///
/// ```text
/// BEGIN:VCARD
/// VERSION:2.1
/// N:<last>;<first>
/// FN:<first> <last>
/// UID:<id>
/// END:VCARD
/// ```
///
/// with every line terminated by CRLF. The writer holds no per-request
/// state, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct VcardRecordWriter {
    policy: EscapePolicy,
}

impl VcardRecordWriter {
    /// Encodings this writer can emit, in order of preference.
    pub const SUPPORTED_ENCODINGS: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::Utf16];

    #[must_use]
    pub const fn new(policy: EscapePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> EscapePolicy {
        self.policy
    }

    /// ## Summary
    /// Returns whether this writer can represent a payload of the given kind.
    ///
    /// True for a single contact and for any contact sequence, empty or not.
    #[must_use]
    pub const fn can_produce(kind: PayloadKind) -> bool {
        matches!(kind, PayloadKind::Contact | PayloadKind::ContactSequence)
    }

    /// ## Summary
    /// Builds the full text body: one block per record, in order, with no separator.
    #[must_use]
    pub fn format_body(&self, payload: &ContactPayload) -> String {
        let mut output = String::new();

        for contact in payload.records() {
            self.format_record(contact, &mut output);
        }

        output
    }

    /// ## Summary
    /// Appends the block for a single contact.
    pub fn format_record(&self, contact: &Contact, output: &mut String) {
        let first = self.field(&contact.first_name);
        let last = self.field(&contact.last_name);
        let id = self.field(contact.id.as_str());

        output.push_str("BEGIN:VCARD");
        output.push_str(CRLF);
        output.push_str("VERSION:2.1");
        output.push_str(CRLF);

        output.push_str("N:");
        output.push_str(&last);
        output.push(';');
        output.push_str(&first);
        output.push_str(CRLF);

        output.push_str("FN:");
        output.push_str(&first);
        output.push(' ');
        output.push_str(&last);
        output.push_str(CRLF);

        output.push_str("UID:");
        output.push_str(&id);
        output.push_str(CRLF);

        output.push_str("END:VCARD");
        output.push_str(CRLF);
    }

    /// ## Summary
    /// Formats the payload, encodes it and writes it to `sink` in one write.
    ///
    /// Buffer construction is synchronous; only the final write and flush await.
    ///
    /// ## Errors
    /// Returns the sink's I/O error unchanged.
    pub async fn write_body<W>(
        &self,
        payload: &ContactPayload,
        encoding: TextEncoding,
        sink: &mut W,
    ) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let bytes = encoding.encode(&self.format_body(payload));
        sink.write_all(&bytes).await?;
        sink.flush().await
    }

    fn field<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.policy {
            EscapePolicy::Escaped => escape_text(value),
            EscapePolicy::Literal => Cow::Borrowed(value),
        }
    }
}
