//! Settings available to handlers through the depot.

use std::sync::Arc;

use contoso_core::error::CoreError;
use salvo::{Depot, FlowCtrl, Request, Response, async_trait};

pub use contoso_core::config::*;

use crate::error::AppResult;

/// Hoop that shares the loaded [`Settings`] with every request.
///
/// Negotiation reads `api.strict_accept` from here per request.
pub struct ConfigHandler {
    pub settings: Arc<Settings>,
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        _res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the settings injected by [`ConfigHandler`].
///
/// ## Errors
/// Returns `CoreError::InvariantViolation` if the hoop did not run.
pub fn get_config_from_depot(depot: &Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Configuration not found in depot").into())
}
