mod app_specific;
pub mod contacts;
pub mod negotiate;

use salvo::Router;

pub use contoso_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_PREFIX, CONTACTS_ROUTE_COMPONENT,
    CONTACTS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the `/api` router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(contacts::routes())
}
