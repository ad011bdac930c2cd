//! HTTP-level integration tests for the contacts service.

mod contacts;
mod helpers;
mod negotiation;
