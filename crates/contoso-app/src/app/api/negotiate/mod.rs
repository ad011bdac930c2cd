//! Response content negotiation.
//!
//! Handlers build an [`ApiPayload`] and hand it to [`respond`], which picks an
//! [`OutputFormatter`] from the request's `Accept` header and an encoding from
//! `Accept-Charset`, then writes the body.

pub mod formatter;
pub mod payload;

use std::sync::Arc;

use contoso_core::config::Settings;
use contoso_core::error::CoreError;
use contoso_core::types::PayloadKind;
use contoso_rfc::rfc::vcard::{EscapePolicy, TextEncoding};
use salvo::http::header::{ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE, HeaderValue};
use salvo::http::mime::Mime;
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, async_trait};

use crate::config::get_config_from_depot;
use crate::error::AppResult;

pub use formatter::{JsonFormatter, OutputFormatter, VcardFormatter};
pub use payload::{ApiPayload, ProblemDetails};

/// A formatter chosen for a response, with the encoding to write in.
#[derive(Clone)]
pub struct Selection {
    pub formatter: Arc<dyn OutputFormatter>,
    pub encoding: TextEncoding,
}

impl Selection {
    /// `Content-Type` value for the selected formatter and encoding.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!(
            "{}; charset={}",
            self.formatter.media_type(),
            self.encoding.charset()
        )
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("media_type", &self.formatter.media_type())
            .field("encoding", &self.encoding)
            .finish()
    }
}

/// Ordered list of formatters. Earlier entries win ties.
#[derive(Clone)]
pub struct FormatterSet {
    formatters: Vec<Arc<dyn OutputFormatter>>,
}

impl FormatterSet {
    #[must_use]
    pub fn new(formatters: Vec<Arc<dyn OutputFormatter>>) -> Self {
        Self { formatters }
    }

    /// JSON first, then vCard, configured from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let policy = EscapePolicy::from_escape_fields(settings.vcard.escape_fields);
        let formatters: Vec<Arc<dyn OutputFormatter>> = vec![
            Arc::new(JsonFormatter) as Arc<dyn OutputFormatter>,
            Arc::new(VcardFormatter::new(policy)),
        ];
        Self::new(formatters)
    }

    /// ## Summary
    /// Picks a formatter and encoding for a payload of `kind`.
    ///
    /// `accept` and `accept_charset` are the raw header values. Media ranges
    /// are tried in descending quality, keeping header order for equal
    /// quality. A missing or blank `Accept` falls back to the first formatter
    /// able to produce `kind`, as does an unmatched one unless `strict_accept`
    /// is set. Non-contact payloads (problem details) always fall back so an
    /// error status is never replaced by `406`.
    ///
    /// Returns `None` when strict matching rejects every range, or when no
    /// formatter can produce `kind` at all.
    #[must_use]
    pub fn select(
        &self,
        accept: Option<&str>,
        accept_charset: Option<&str>,
        kind: PayloadKind,
        strict_accept: bool,
    ) -> Option<Selection> {
        let accept = accept.filter(|value| !value.trim().is_empty());
        let ranges = accept.map(parse_accept).unwrap_or_default();

        let matched = ranges.iter().find_map(|range| {
            self.formatters.iter().find(|formatter| {
                formatter.can_produce(kind) && media_range_matches(range, formatter.media_type())
            })
        });

        let must_match =
            accept.is_some() && strict_accept && !matches!(kind, PayloadKind::Other(_));

        let formatter = match matched {
            Some(formatter) => formatter,
            None if must_match => {
                tracing::debug!(accept = ?accept, %kind, "No formatter matches Accept");
                return None;
            }
            None => self.formatters.iter().find(|f| f.can_produce(kind))?,
        };

        let encoding = select_encoding(formatter.supported_encodings(), accept_charset)?;

        Some(Selection {
            formatter: Arc::clone(formatter),
            encoding,
        })
    }
}

impl std::fmt::Debug for FormatterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterSet")
            .field(
                "formatters",
                &self
                    .formatters
                    .iter()
                    .map(|formatter| formatter.media_type())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Splits a `q=` weighted header list into its values, dropping `q=0` and
/// ordering by descending quality.
fn weighted_values(header: &str) -> Vec<(&str, f32)> {
    let mut values: Vec<(&str, f32)> = header
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let mut parts = item.split(';').map(str::trim);
            let value = parts.next().unwrap_or_default();
            let quality = parts
                .filter_map(|param| param.split_once('='))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                .and_then(|(_, q)| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (value, quality)
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    values.sort_by(|a, b| b.1.total_cmp(&a.1));
    values
}

fn parse_accept(header: &str) -> Vec<Mime> {
    weighted_values(header)
        .into_iter()
        .filter_map(|(value, _)| value.parse::<Mime>().ok())
        .collect()
}

fn media_range_matches(range: &Mime, media_type: &str) -> bool {
    let Ok(candidate) = media_type.parse::<Mime>() else {
        return false;
    };

    if range.type_() == salvo::http::mime::STAR {
        return true;
    }

    range.type_() == candidate.type_()
        && (range.subtype() == salvo::http::mime::STAR || range.subtype() == candidate.subtype())
}

/// First acceptable charset that the formatter supports, else its default.
fn select_encoding(
    supported: &[TextEncoding],
    accept_charset: Option<&str>,
) -> Option<TextEncoding> {
    let default = supported.first().copied()?;

    let Some(header) = accept_charset else {
        return Some(default);
    };

    let chosen = weighted_values(header).into_iter().find_map(|(label, _)| {
        if label == "*" {
            return Some(default);
        }
        match label.parse::<TextEncoding>() {
            Ok(encoding) => supported.contains(&encoding).then_some(encoding),
            Err(e) => {
                tracing::trace!(error = %e, "Skipping charset");
                None
            }
        }
    });

    Some(chosen.unwrap_or(default))
}

/// Injects the configured [`FormatterSet`] into the depot.
pub struct OutputFormattersHandler {
    pub formatters: Arc<FormatterSet>,
}

#[async_trait]
impl salvo::Handler for OutputFormattersHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        _res: &mut Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.formatters));
    }
}

/// ## Summary
/// Retrieves the formatter set from the depot.
///
/// ## Errors
/// Returns an error if no formatter set was injected.
pub fn get_formatters_from_depot(depot: &Depot) -> AppResult<Arc<FormatterSet>> {
    depot
        .obtain::<Arc<FormatterSet>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Formatter set not found in depot").into())
}

fn header_str<'a>(req: &'a Request, name: &salvo::http::header::HeaderName) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// ## Summary
/// Chooses how a payload of `kind` would be written for this request.
///
/// Handlers with side effects call this first so that a request which will
/// end in `406` changes nothing.
///
/// ## Errors
/// Returns an error if the formatter set or the settings are missing from the depot.
pub fn negotiate(
    req: &Request,
    depot: &Depot,
    kind: PayloadKind,
) -> AppResult<Option<Selection>> {
    let formatters = get_formatters_from_depot(depot)?;
    let settings = get_config_from_depot(depot)?;

    Ok(formatters.select(
        header_str(req, &ACCEPT),
        header_str(req, &ACCEPT_CHARSET),
        kind,
        settings.api.strict_accept,
    ))
}

/// ## Summary
/// Writes `payload` with `status`, negotiating format and charset.
///
/// ## Side Effects
/// Sets the status, `Content-Type` and body on `res`. Answers `406` when
/// strict matching rejects every formatter and `500` when negotiation, the
/// formatter or the response body fails.
#[tracing::instrument(skip_all, fields(status = %status, kind = %payload.kind()))]
pub async fn respond(
    req: &Request,
    depot: &Depot,
    res: &mut Response,
    status: StatusCode,
    payload: &ApiPayload,
) {
    let selection = match negotiate(req, depot, payload.kind()) {
        Ok(Some(selection)) => selection,
        Ok(None) => {
            res.status_code(StatusCode::NOT_ACCEPTABLE);
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to negotiate response");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let mut body: Vec<u8> = Vec::new();
    if let Err(e) = selection
        .formatter
        .write_body(payload, selection.encoding, &mut body)
        .await
    {
        tracing::error!(error = %e, ?selection, "Failed to write response body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }

    let Ok(content_type) = HeaderValue::from_str(&selection.content_type()) else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    tracing::debug!(?selection, bytes = body.len(), "Writing negotiated response");

    res.status_code(status);
    if res.add_header(CONTENT_TYPE, content_type, true).is_err()
        || res.write_body(body).is_err()
    {
        tracing::error!("Failed to set response body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
