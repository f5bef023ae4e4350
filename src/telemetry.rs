//! Structured logging setup.

use crate::config::Config;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive does not parse.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Offending directive.
        directive: String,
        /// Parse failure.
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs a stderr `fmt` subscriber filtered by `directive`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directive is invalid or a subscriber
/// is already installed.
pub fn init(directive: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

/// Installs the subscriber using the configured filter.
///
/// # Errors
///
/// See [`init`].
pub fn init_from_config(config: &Config) -> Result<(), TelemetryError> {
    init(config.log_filter())
}
