//! vCard core types.
//!
//! - [`VCard`] - A parsed card
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//! - [`StructuredName`] - N property (family, given, etc.)

mod parameter;
mod property;
mod structured;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, VCardValue};
pub use structured::StructuredName;
pub use vcard::{VCard, VCardVersion};
