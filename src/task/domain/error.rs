//! Error types for task domain validation.

use crate::property::domain::PropertyDomainError;
use crate::status::domain::StatusDomainError;
use thiserror::Error;

/// Errors returned while constructing or mutating tasks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// An AI score is outside `0..=100`.
    #[error("ai score {0} is out of range, expected 0..=100")]
    AiScoreOutOfRange(u16),

    /// The status slug is malformed.
    #[error(transparent)]
    Status(#[from] StatusDomainError),

    /// A property value does not fit its definition.
    #[error(transparent)]
    Property(#[from] PropertyDomainError),
}
