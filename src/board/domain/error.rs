//! Parse errors for persisted board settings.

use thiserror::Error;

/// Error returned while parsing a view kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown view kind: {0}")]
pub struct ParseViewKindError(pub String);

/// Error returned while parsing a sort field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct ParseSortFieldError(pub String);
