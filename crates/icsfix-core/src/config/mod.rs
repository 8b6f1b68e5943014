use std::fmt;

use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;
use uuid::Uuid;

use crate::constants::DEFAULT_USER_AGENT;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Total request timeout for fetching a feed.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A user's upstream calendar feed.
#[derive(Clone, Deserialize)]
pub struct FeedConfig {
    pub user_id: Uuid,
    pub url: String,
}

/// Feed URLs may carry access tokens and are left out of debug output.
impl fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedConfig")
            .field("user_id", &self.user_id)
            .field("url", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with default values.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "info")?
            .set_default("upstream.timeout_secs", 30)?
            .set_default("upstream.user_agent", DEFAULT_USER_AGENT)?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `ICSFIX_` prefix and `__` between nested keys,
    /// e.g. `ICSFIX_SERVER__PORT=9000`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(
                config::Environment::with_prefix("ICSFIX")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Returns the feed URL configured for `user_id`, if any.
    #[must_use]
    pub fn feed_url(&self, user_id: Uuid) -> Option<&str> {
        self.feeds
            .iter()
            .find(|feed| feed.user_id == user_id)
            .map(|feed| feed.url.as_str())
    }

    /// ## Summary
    /// Checks that every feed has a URL and that no user is listed twice.
    ///
    /// ## Errors
    /// Returns `ConfigError` naming the first offending feed entry.
    pub fn validate(&self) -> CoreResult<()> {
        for (i, feed) in self.feeds.iter().enumerate() {
            if feed.url.trim().is_empty() {
                return Err(CoreError::ConfigError(format!(
                    "feed for user {} has an empty url",
                    feed.user_id
                )));
            }
            if self.feeds[..i].iter().any(|f| f.user_id == feed.user_id) {
                return Err(CoreError::ConfigError(format!(
                    "user {} has more than one feed",
                    feed.user_id
                )));
            }
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(feeds = settings.feeds.len(), "Configuration loaded");
    Ok(settings)
}
