//! Ordered action chain of a rule.

use super::AutomationDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What an action does.
///
/// Unknown types read from storage are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    /// Move the task to another status.
    ChangeStatus,
    /// Assign the task to a member.
    AssignMember,
    /// Notify members.
    SendNotification,
    /// Ask the AI collaborator for content.
    GenerateContent,
    /// Call an external URL.
    Webhook,
    /// Any other stored action type.
    Custom(String),
}

impl ActionKind {
    /// Parses an action type, keeping unknown names as [`Self::Custom`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "change_status" => Self::ChangeStatus,
            "assign_member" => Self::AssignMember,
            "send_notification" => Self::SendNotification,
            "generate_content" => Self::GenerateContent,
            "webhook" => Self::Webhook,
            _ => Self::Custom(value.trim().to_owned()),
        }
    }

    /// Returns the storage name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ChangeStatus => "change_status",
            Self::AssignMember => "assign_member",
            Self::SendNotification => "send_notification",
            Self::GenerateContent => "generate_content",
            Self::Webhook => "webhook",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for ActionKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ActionKind> for String {
    fn from(value: ActionKind) -> Self {
        value.as_str().to_owned()
    }
}

/// One entry of a rule's action chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// One-based position in the chain.
    pub step: u32,
    /// Action type.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Action-specific settings.
    #[serde(default)]
    pub config: Value,
}

impl ActionStep {
    /// Creates an unnumbered step; rules number their chain on write.
    #[must_use]
    pub const fn new(kind: ActionKind, config: Value) -> Self {
        Self {
            step: 0,
            kind,
            config,
        }
    }
}

/// Validates a chain and numbers it 1..=n in the given order.
pub(super) fn number_steps(actions: Vec<ActionStep>) -> Result<Vec<ActionStep>, AutomationDomainError> {
    actions
        .into_iter()
        .zip(1_u32..)
        .map(|(action, step)| {
            if action.kind.as_str().is_empty() {
                return Err(AutomationDomainError::EmptyActionKind);
            }
            Ok(ActionStep { step, ..action })
        })
        .collect()
}
