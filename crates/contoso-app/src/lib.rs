//! Contoso contacts HTTP service.

pub mod app;
pub mod config;
pub mod error;
pub mod store;
pub mod store_handler;
