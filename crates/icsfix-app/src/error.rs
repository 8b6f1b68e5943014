use salvo::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use icsfix_core::error::CoreError;
use icsfix_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("No feed configured for user {0}")]
    UnknownUser(Uuid),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status returned to the client.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(e) if e.is_upstream_error() || e.is_parse_error() => {
                StatusCode::BAD_GATEWAY
            }
            Self::CoreError(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::UnknownUser(_) => StatusCode::NOT_FOUND,
            Self::ServiceError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Returns the message shown to clients.
    ///
    /// Upstream details are only logged, since feed URLs may carry access
    /// tokens.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::ServiceError(e) if e.is_upstream_error() => {
                "Upstream feed could not be retrieved".to_string()
            }
            Self::ServiceError(e) if e.is_parse_error() => {
                "Upstream feed is not a valid calendar".to_string()
            }
            Self::CoreError(CoreError::InvalidInput(msg)) => msg.clone(),
            Self::UnknownUser(_) => "Feed not found".to_string(),
            Self::ServiceError(_) | Self::CoreError(_) => "Internal server error".to_string(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
