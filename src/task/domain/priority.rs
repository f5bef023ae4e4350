//! Task priority levels and their sort weights.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
///
/// Stored as an uppercase label. Labels written by other clients that this
/// crate does not know are kept verbatim in [`TaskPriority::Unrecognized`]
/// and sort below every known level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    /// Lowest known priority.
    Low,
    /// Default working priority.
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention now.
    Urgent,
    /// A stored label outside the known set.
    Unrecognized(String),
}

impl TaskPriority {
    /// Parses a stored label. Matching ignores case and surrounding spaces.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "URGENT" => Self::Urgent,
            _ => Self::Unrecognized(value.to_owned()),
        }
    }

    /// Returns the storage label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
            Self::Unrecognized(label) => label,
        }
    }

    /// Sort weight: URGENT=4, HIGH=3, MEDIUM=2, LOW=1, anything else 0.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::Urgent => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unrecognized(_) => 0,
        }
    }
}

impl From<String> for TaskPriority {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TaskPriority> for String {
    fn from(value: TaskPriority) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
