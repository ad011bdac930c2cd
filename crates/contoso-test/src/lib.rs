//! Contoso contacts service - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use `contoso_test::` paths.

pub mod component {
    pub use contoso_core::*;
}

pub use contoso_rfc as rfc;

pub mod app {
    pub use contoso_app::*;

    pub mod api {
        pub use contoso_app::app::api::*;
    }
}
