//! Error types for property schema and value validation.

use super::PropertyKind;
use thiserror::Error;

/// Errors returned while building definitions or validating values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropertyDomainError {
    /// The definition name is empty after trimming.
    #[error("property name must not be empty")]
    EmptyName,

    /// Options were given for a kind that does not take them.
    #[error("property kind '{0}' does not accept options")]
    OptionsNotSupported(PropertyKind),

    /// An option label is empty after trimming.
    #[error("option label must not be empty")]
    EmptyOption,

    /// The same option label appears twice.
    #[error("duplicate option '{0}'")]
    DuplicateOption(String),

    /// The value variant does not match the definition kind.
    #[error("value of kind '{value}' cannot be stored in a '{definition}' property")]
    KindMismatch {
        /// Kind declared by the definition.
        definition: PropertyKind,
        /// Kind of the offered value.
        value: PropertyKind,
    },

    /// A select value names an option the definition does not list.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// A number value is NaN or infinite.
    #[error("number values must be finite")]
    NonFiniteNumber,

    /// A url value is not an absolute http(s) URL.
    #[error("invalid url '{0}'")]
    InvalidUrl(String),

    /// An email value is not `local@domain.tld`.
    #[error("invalid email '{0}'")]
    InvalidEmail(String),
}

/// Error returned while parsing property kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown property kind: {0}")]
pub struct ParsePropertyKindError(pub String);
