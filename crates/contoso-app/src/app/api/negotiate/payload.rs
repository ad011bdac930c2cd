//! Response payloads handed to output formatters.

use contoso_core::types::{ContactPayload, PayloadKind};
use salvo::http::StatusCode;
use serde::Serialize;

/// Error body in the shape of RFC 9457 problem details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            status: status.as_u16(),
            detail: Some(detail.into()),
        }
    }
}

/// Everything a contacts handler can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPayload {
    Contacts(ContactPayload),
    Problem(ProblemDetails),
}

impl ApiPayload {
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Contacts(contacts) => contacts.kind(),
            Self::Problem(_) => PayloadKind::Other("ProblemDetails"),
        }
    }
}

impl From<ContactPayload> for ApiPayload {
    fn from(value: ContactPayload) -> Self {
        Self::Contacts(value)
    }
}

impl From<ProblemDetails> for ApiPayload {
    fn from(value: ProblemDetails) -> Self {
        Self::Problem(value)
    }
}
