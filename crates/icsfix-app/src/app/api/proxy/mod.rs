//! Patched feed proxy: `GET /api/v1/proxy/{user_id}`.

use salvo::http::StatusCode;
use salvo::http::header::CONTENT_TYPE;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Serialize;
use uuid::Uuid;

use icsfix_core::constants::{ICS_CONTENT_TYPE, PROXY_ROUTE_COMPONENT};
use icsfix_core::error::CoreError;
use icsfix_service::fetch_and_modify;

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::upstream_handler::get_upstream_from_depot;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /proxy/{user_id} - Serves the user's upstream feed with all event
/// patches applied.
///
/// ## Errors
/// Returns HTTP 400 if `user_id` is not a UUID
/// Returns HTTP 404 if no feed is configured for the user
/// Returns HTTP 502 if the upstream feed cannot be fetched or parsed
#[handler]
async fn proxy_feed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let raw_id = req.param::<String>("user_id").unwrap_or_default();

    match patched_feed(&raw_id, depot).await {
        Ok(body) => {
            if let Err(e) = res.add_header(CONTENT_TYPE, ICS_CONTENT_TYPE, true) {
                tracing::warn!(error = %e, "Failed to set Content-Type header");
            }
            res.status_code(StatusCode::OK);
            if let Err(e) = res.write_body(body) {
                tracing::error!(error = %e, "Failed to write response body");
            }
        }
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!(error = %e, %status, "Failed to serve feed");
            } else {
                tracing::debug!(error = %e, %status, "Rejected feed request");
            }
            res.status_code(status);
            res.render(Json(ErrorResponse {
                error: e.public_message(),
            }));
        }
    }
}

async fn patched_feed(raw_id: &str, depot: &Depot) -> AppResult<Vec<u8>> {
    let user_id = Uuid::parse_str(raw_id)
        .map_err(|_err| CoreError::InvalidInput("Invalid user ID format".to_string()))?;

    let config = get_config_from_depot(depot)?;
    let url = config
        .feed_url(user_id)
        .ok_or(AppError::UnknownUser(user_id))?;

    let client = get_upstream_from_depot(depot)?;

    tracing::debug!(%user_id, "Fetching feed");
    Ok(fetch_and_modify(&client, url).await?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PROXY_ROUTE_COMPONENT).push(Router::with_path("{user_id}").get(proxy_feed))
}
