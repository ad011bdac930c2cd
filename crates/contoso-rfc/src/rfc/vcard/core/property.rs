//! vCard property types.

use super::parameter::VCardParameter;
use super::structured::StructuredName;

/// Interpreted property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Unescaped text.
    Text(String),
    /// Structured name (N).
    StructuredName(StructuredName),
}

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Interpreted value.
    pub value: VCardValue,
    /// Value exactly as it appeared on the content line.
    pub raw_value: String,
}

impl VCardProperty {
    /// Returns the text value if this is a text property.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            VCardValue::Text(s) => Some(s),
            VCardValue::StructuredName(_) => None,
        }
    }

    /// Returns the structured name if this is an N property.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match &self.value {
            VCardValue::StructuredName(name) => Some(name),
            VCardValue::Text(_) => None,
        }
    }

    /// Returns whether the property has a TYPE parameter with the given value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .iter()
            .filter(|p| p.name == "TYPE")
            .any(|p| p.has_value(type_value))
    }
}
