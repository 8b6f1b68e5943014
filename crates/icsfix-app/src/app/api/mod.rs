mod app_specific;
mod proxy;

use salvo::Router;

// Re-export route constants from core
pub use icsfix_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, API_VERSION_COMPONENT, API_VERSION_PREFIX,
    PROXY_ROUTE_COMPONENT, PROXY_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the versioned API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT).push(
        Router::with_path(API_VERSION_COMPONENT)
            .push(app_specific::routes())
            .push(proxy::routes()),
    )
}
