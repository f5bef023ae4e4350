//! Error types for status registry validation.

use crate::workspace::domain::WorkspaceDomainError;
use thiserror::Error;

/// Errors returned while constructing status registry values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusDomainError {
    /// The status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyName,

    /// The slug is empty or contains characters outside `[a-z0-9_-]`.
    #[error("invalid status slug '{0}'")]
    InvalidSlug(String),

    /// The colour failed validation.
    #[error(transparent)]
    Color(#[from] WorkspaceDomainError),
}
