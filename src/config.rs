//! Runtime configuration read from `AGENCYDESK_*` environment variables.

use std::time::Duration;
use thiserror::Error;

const DATABASE_URL: &str = "AGENCYDESK_DATABASE_URL";
const DB_POOL_SIZE: &str = "AGENCYDESK_DB_POOL_SIZE";
const REALTIME_CAPACITY: &str = "AGENCYDESK_REALTIME_CAPACITY";
const ASSISTANT_URL: &str = "AGENCYDESK_ASSISTANT_URL";
const ASSISTANT_TIMEOUT_SECS: &str = "AGENCYDESK_ASSISTANT_TIMEOUT_SECS";
const LOG_FILTER: &str = "AGENCYDESK_LOG";

const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_REALTIME_CAPACITY: usize = 256;
const DEFAULT_ASSISTANT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors returned while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed, or is out of range.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending raw value.
        value: String,
    },
}

/// Process-wide settings for adapters and telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    database_url: Option<String>,
    pool_size: u32,
    realtime_capacity: usize,
    assistant_url: Option<String>,
    assistant_timeout: Duration,
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            realtime_capacity: DEFAULT_REALTIME_CAPACITY,
            assistant_url: None,
            assistant_timeout: Duration::from_secs(DEFAULT_ASSISTANT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric variable does not
    /// parse or is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric variable does not
    /// parse or is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Ok(Self {
            database_url: read(DATABASE_URL),
            pool_size: parse_positive(DB_POOL_SIZE, read(DB_POOL_SIZE), defaults.pool_size)?,
            realtime_capacity: parse_positive(
                REALTIME_CAPACITY,
                read(REALTIME_CAPACITY),
                defaults.realtime_capacity,
            )?,
            assistant_url: read(ASSISTANT_URL).map(|url| url.trim_end_matches('/').to_owned()),
            assistant_timeout: Duration::from_secs(parse_positive(
                ASSISTANT_TIMEOUT_SECS,
                read(ASSISTANT_TIMEOUT_SECS),
                DEFAULT_ASSISTANT_TIMEOUT_SECS,
            )?),
            log_filter: read(LOG_FILTER).unwrap_or(defaults.log_filter),
        })
    }

    /// Sets the database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Sets the AI collaborator base URL.
    #[must_use]
    pub fn with_assistant_url(mut self, url: impl Into<String>) -> Self {
        self.assistant_url = Some(url.into());
        self
    }

    /// Returns the PostgreSQL URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the buffer size of realtime change-feed channels.
    #[must_use]
    pub const fn realtime_capacity(&self) -> usize {
        self.realtime_capacity
    }

    /// Returns the AI collaborator base URL, without a trailing slash.
    #[must_use]
    pub fn assistant_url(&self) -> Option<&str> {
        self.assistant_url.as_deref()
    }

    /// Returns the per-request timeout for the AI collaborator.
    #[must_use]
    pub const fn assistant_timeout(&self) -> Duration {
        self.assistant_timeout
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_positive<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
