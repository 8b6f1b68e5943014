//! Retrieval of upstream calendar feeds over HTTP.

use std::time::Duration;

use icsfix_core::config::UpstreamConfig;
use reqwest::{StatusCode, Url};
use thiserror::Error;

const WEBCAL_SCHEME: &str = "webcal://";

/// Errors raised while fetching an upstream feed.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Invalid feed URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream {url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// HTTP client for upstream feeds.
///
/// Built once and shared; `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// ## Summary
    /// Creates a client with the configured timeout and user agent.
    ///
    /// ## Errors
    /// Returns an error if the underlying HTTP client cannot be built, for
    /// example because the user agent is not a valid header value.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self { http })
    }

    /// ## Summary
    /// Normalizes a feed URL. `webcal://` becomes `https://`; only HTTP(S)
    /// URLs are accepted.
    ///
    /// ## Errors
    /// Returns `InvalidUrl` if the URL does not parse or uses another scheme.
    pub fn feed_url(url: &str) -> Result<Url, UpstreamError> {
        let invalid = |reason: String| UpstreamError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        let trimmed = url.trim();
        let normalized = match trimmed.get(..WEBCAL_SCHEME.len()) {
            Some(scheme) if scheme.eq_ignore_ascii_case(WEBCAL_SCHEME) => {
                format!("https://{}", &trimmed[WEBCAL_SCHEME.len()..])
            }
            _ => trimmed.to_string(),
        };

        let parsed = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }

    /// ## Summary
    /// Downloads the feed at `url` and returns the response body.
    ///
    /// ## Errors
    /// Returns `InvalidUrl` for unusable URLs, `Request` for transport
    /// failures and timeouts, and `Status` for non-2xx responses.
    #[tracing::instrument(skip(self, url))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        let feed_url = Self::feed_url(url)?;
        let request_err = |source: reqwest::Error| UpstreamError::Request {
            url: feed_url.to_string(),
            source,
        };

        let response = self
            .http
            .get(feed_url.clone())
            .send()
            .await
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Upstream feed request failed");
            return Err(UpstreamError::Status {
                url: feed_url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(request_err)?;
        tracing::debug!(body_len = body.len(), "Fetched upstream feed");

        Ok(body.to_vec())
    }
}
