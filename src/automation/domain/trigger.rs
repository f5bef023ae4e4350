//! Events that can start an automation rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event a rule listens for.
///
/// Unknown names read from storage are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerEvent {
    /// A task was created.
    TaskCreated,
    /// A task moved to another status.
    StatusChanged,
    /// A task's due date is near.
    DueDateApproaching,
    /// A task was assigned to a member.
    TaskAssigned,
    /// Content was published.
    ContentPublished,
    /// Any other stored trigger name.
    Custom(String),
}

impl TriggerEvent {
    /// Parses a trigger name, keeping unknown names as [`Self::Custom`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "task_created" => Self::TaskCreated,
            "status_changed" => Self::StatusChanged,
            "due_date_approaching" => Self::DueDateApproaching,
            "task_assigned" => Self::TaskAssigned,
            "content_published" => Self::ContentPublished,
            _ => Self::Custom(value.trim().to_owned()),
        }
    }

    /// Returns the storage name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::TaskCreated => "task_created",
            Self::StatusChanged => "status_changed",
            Self::DueDateApproaching => "due_date_approaching",
            Self::TaskAssigned => "task_assigned",
            Self::ContentPublished => "content_published",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for TriggerEvent {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TriggerEvent> for String {
    fn from(value: TriggerEvent) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
