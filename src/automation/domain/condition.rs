//! Rule filters as a tree of conditions.

use super::AutomationDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison applied by a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    /// Field equals value.
    Equals,
    /// Field differs from value.
    NotEquals,
    /// Field contains value.
    Contains,
    /// Field is greater than value.
    GreaterThan,
    /// Field is less than value.
    LessThan,
    /// Field is unset or empty.
    IsEmpty,
    /// Field is set and non-empty.
    IsNotEmpty,
}

impl ConditionOperator {
    /// Returns `true` for operators that compare against a value.
    #[must_use]
    pub const fn needs_value(self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
        }
    }
}

/// Node of a rule's filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionNode {
    /// Every child must hold. An empty group always holds.
    All {
        /// Child nodes.
        conditions: Vec<ConditionNode>,
    },
    /// At least one child must hold.
    Any {
        /// Child nodes.
        conditions: Vec<ConditionNode>,
    },
    /// A single field comparison.
    Condition {
        /// Task field or property name.
        field: String,
        /// Comparison.
        operator: ConditionOperator,
        /// Comparison operand.
        #[serde(default)]
        value: Value,
    },
}

impl Default for ConditionNode {
    fn default() -> Self {
        Self::All {
            conditions: Vec::new(),
        }
    }
}

impl ConditionNode {
    /// Builds a leaf condition.
    #[must_use]
    pub fn condition(field: impl Into<String>, operator: ConditionOperator, value: Value) -> Self {
        Self::Condition {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Returns the number of leaf conditions in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::All { conditions } | Self::Any { conditions } => {
                conditions.iter().map(Self::leaf_count).sum()
            }
            Self::Condition { .. } => 1,
        }
    }

    /// Checks every leaf in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationDomainError`] for the first leaf with a blank field
    /// or a comparison without a value.
    pub fn validate(&self) -> Result<(), AutomationDomainError> {
        match self {
            Self::All { conditions } | Self::Any { conditions } => {
                conditions.iter().try_for_each(Self::validate)
            }
            Self::Condition {
                field,
                operator,
                value,
            } => {
                if field.trim().is_empty() {
                    return Err(AutomationDomainError::EmptyConditionField);
                }
                if operator.needs_value() && value.is_null() {
                    return Err(AutomationDomainError::MissingConditionValue(
                        operator.as_str().to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}
