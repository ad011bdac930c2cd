//! Output formatters selectable through content negotiation.

use contoso_core::constants::{JSON_MEDIA_TYPE, VCARD_MEDIA_TYPE};
use contoso_core::error::CoreError;
use contoso_core::types::{ContactPayload, PayloadKind};
use contoso_rfc::rfc::vcard::{EscapePolicy, TextEncoding, VcardRecordWriter};
use salvo::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::payload::ApiPayload;
use crate::error::AppResult;

/// Sink a formatter writes the encoded body into.
pub type BodySink = dyn AsyncWrite + Unpin + Send;

/// A serializer for one media type.
#[async_trait]
pub trait OutputFormatter: Send + Sync {
    /// Media type essence, e.g. `text/vcard`.
    fn media_type(&self) -> &'static str;

    /// Encodings in order of preference; the first is the default.
    fn supported_encodings(&self) -> &[TextEncoding];

    /// Whether this formatter can represent payloads of `kind`.
    fn can_produce(&self, kind: PayloadKind) -> bool;

    /// ## Summary
    /// Renders the payload to text.
    ///
    /// ## Errors
    /// Returns an error if the payload is not one this formatter produces.
    fn format_body(&self, payload: &ApiPayload) -> AppResult<String>;

    /// ## Summary
    /// Renders, encodes and writes the payload in a single write.
    ///
    /// ## Errors
    /// Returns formatting errors and sink I/O errors.
    async fn write_body(
        &self,
        payload: &ApiPayload,
        encoding: TextEncoding,
        sink: &mut BodySink,
    ) -> AppResult<()> {
        let bytes = encoding.encode(&self.format_body(payload)?);
        sink.write_all(&bytes).await?;
        sink.flush().await?;
        Ok(())
    }
}

/// `application/json`, able to serialize every payload.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[async_trait]
impl OutputFormatter for JsonFormatter {
    fn media_type(&self) -> &'static str {
        JSON_MEDIA_TYPE
    }

    fn supported_encodings(&self) -> &[TextEncoding] {
        &[TextEncoding::Utf8]
    }

    fn can_produce(&self, _kind: PayloadKind) -> bool {
        true
    }

    fn format_body(&self, payload: &ApiPayload) -> AppResult<String> {
        Ok(match payload {
            ApiPayload::Contacts(ContactPayload::Single(contact)) => {
                serde_json::to_string(contact)?
            }
            ApiPayload::Contacts(ContactPayload::Sequence(contacts)) => {
                serde_json::to_string(contacts)?
            }
            ApiPayload::Problem(problem) => serde_json::to_string(problem)?,
        })
    }
}

/// `text/vcard`, backed by [`VcardRecordWriter`].
#[derive(Debug, Default)]
pub struct VcardFormatter {
    writer: VcardRecordWriter,
}

impl VcardFormatter {
    #[must_use]
    pub const fn new(policy: EscapePolicy) -> Self {
        Self {
            writer: VcardRecordWriter::new(policy),
        }
    }

    fn contacts(payload: &ApiPayload) -> AppResult<&ContactPayload> {
        match payload {
            ApiPayload::Contacts(contacts) => Ok(contacts),
            ApiPayload::Problem(_) => Err(CoreError::InvariantViolation(
                "vCard formatter selected for a non-contact payload",
            )
            .into()),
        }
    }
}

#[async_trait]
impl OutputFormatter for VcardFormatter {
    fn media_type(&self) -> &'static str {
        VCARD_MEDIA_TYPE
    }

    fn supported_encodings(&self) -> &[TextEncoding] {
        &VcardRecordWriter::SUPPORTED_ENCODINGS
    }

    fn can_produce(&self, kind: PayloadKind) -> bool {
        VcardRecordWriter::can_produce(kind)
    }

    fn format_body(&self, payload: &ApiPayload) -> AppResult<String> {
        Ok(self.writer.format_body(Self::contacts(payload)?))
    }

    async fn write_body(
        &self,
        payload: &ApiPayload,
        encoding: TextEncoding,
        sink: &mut BodySink,
    ) -> AppResult<()> {
        let contacts = Self::contacts(payload)?;
        self.writer.write_body(contacts, encoding, sink).await?;
        Ok(())
    }
}
