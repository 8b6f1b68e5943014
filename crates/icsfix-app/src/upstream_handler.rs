use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use icsfix_core::error::CoreError;
use icsfix_service::upstream::UpstreamClient;

pub struct UpstreamClientHandler {
    pub client: Arc<UpstreamClient>,
}

#[async_trait]
impl salvo::Handler for UpstreamClientHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.client));
    }
}

/// ## Summary
/// Retrieves the shared upstream HTTP client from the depot.
///
/// ## Errors
/// Returns an error if the client is not found in the depot.
pub fn get_upstream_from_depot(depot: &salvo::Depot) -> AppResult<Arc<UpstreamClient>> {
    depot
        .obtain::<Arc<UpstreamClient>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Upstream client not found in depot").into())
}
