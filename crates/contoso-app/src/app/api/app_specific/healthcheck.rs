use salvo::{Router, handler};

/// ## Summary
/// GET /api/app/healthcheck - Liveness check.
#[handler]
async fn healthcheck() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}
