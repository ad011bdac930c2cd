//! Output text encodings accepted by the vCard writer.

use crate::error::RfcError;

/// Character encoding of a written body.
///
/// Only these two are ever handed to the writer; anything else is turned
/// away during charset negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-16, little-endian, no byte order mark.
    Utf16,
}

impl TextEncoding {
    /// Maps a charset label (case-insensitive) to an encoding.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "utf-16" | "utf-16le" | "unicode" => Some(Self::Utf16),
            _ => None,
        }
    }

    /// Returns the label written into the `charset` media type parameter.
    #[must_use]
    pub const fn charset(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16le",
        }
    }

    /// Encodes text into bytes.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16 => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.charset())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| RfcError::UnsupportedCharset(s.to_owned()))
    }
}
