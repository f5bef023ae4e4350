//! Error types for workspace domain validation.

use thiserror::Error;

/// Errors returned while constructing workspace domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// The workspace name is empty after trimming.
    #[error("workspace name must not be empty")]
    EmptyName,

    /// The colour is not a `#rgb` or `#rrggbb` hex string.
    #[error("invalid colour '{0}', expected #rrggbb")]
    InvalidColor(String),
}
