use thiserror::Error;

use crate::upstream::UpstreamError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] icsfix_rfc::error::RfcError),

    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),

    #[error(transparent)]
    CoreError(#[from] icsfix_core::error::CoreError),
}

impl From<icsfix_rfc::rfc::ical::ParseError> for ServiceError {
    fn from(err: icsfix_rfc::rfc::ical::ParseError) -> Self {
        Self::RfcError(err.into())
    }
}

impl ServiceError {
    /// Returns whether the error was caused by malformed calendar data.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::RfcError(icsfix_rfc::error::RfcError::ParseError(_))
        )
    }

    /// Returns whether the error was caused by fetching the upstream feed.
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, Self::UpstreamError(_))
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
