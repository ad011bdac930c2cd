//! vCard wrapper type.

use super::property::VCardProperty;
use super::structured::StructuredName;

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (versit).
    #[default]
    V21,
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties except VERSION, in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property("FN").and_then(VCardProperty::as_text)
    }

    /// Returns the structured name (N).
    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        self.get_property("N")
            .and_then(VCardProperty::as_structured_name)
    }

    /// Returns the unique identifier (UID).
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property("UID").and_then(VCardProperty::as_text)
    }
}
