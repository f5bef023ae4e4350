//! Validation errors for automation rules.

use thiserror::Error;

/// Errors raised while authoring an automation rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomationDomainError {
    /// The rule name is blank.
    #[error("rule name must not be empty")]
    EmptyName,

    /// A condition names no field.
    #[error("condition field must not be empty")]
    EmptyConditionField,

    /// A comparison operator was given no value to compare against.
    #[error("operator '{0}' needs a value")]
    MissingConditionValue(String),

    /// An action type is blank.
    #[error("action type must not be empty")]
    EmptyActionKind,
}
