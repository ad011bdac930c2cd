//! Contoso core types shared across the workspace.
//!
//! Holds the `Contact` model, the payload descriptors used for
//! formatter selection, settings loading, and route constants.

pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod types;
