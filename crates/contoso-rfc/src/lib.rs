//! Text formats spoken by the Contoso contacts service.

pub mod error;
pub mod rfc;
