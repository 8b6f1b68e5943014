pub mod api;

use std::sync::Arc;

use salvo::Router;
use salvo::logging::Logger;

use crate::config::{ConfigHandler, Settings};
use crate::upstream_handler::UpstreamClientHandler;
use icsfix_service::upstream::UpstreamClient;

/// ## Summary
/// Builds the root router with configuration and the upstream client
/// available to every handler.
///
/// ## Errors
/// Returns an error if the upstream HTTP client cannot be created.
pub fn router(settings: Settings) -> anyhow::Result<Router> {
    let client = UpstreamClient::new(&settings.upstream)?;

    Ok(Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: Arc::new(settings),
        })
        .hoop(UpstreamClientHandler {
            client: Arc::new(client),
        })
        .push(api::routes()))
}
