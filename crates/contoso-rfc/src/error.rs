use thiserror::Error;

/// Errors raised while choosing how a body is encoded.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RfcError {
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),
}
