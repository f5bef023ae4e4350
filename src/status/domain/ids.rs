//! Identifier and slug types for the status registry.

use super::StatusDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a status registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(Uuid);

impl StatusId {
    /// Creates a new random status identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a status identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for StatusId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable key tasks use to reference a status, e.g. `client_review`.
///
/// The slug is also the kanban column identifier. Registry entries always
/// carry the strict `[a-z0-9_-]` shape; a task may hold any non-blank text,
/// which then matches no column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusSlug(String);

impl StatusSlug {
    /// Creates a validated slug.
    ///
    /// The input is trimmed and lowercased. Only `[a-z0-9_-]` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::InvalidSlug`] when the value is empty or
    /// contains other characters.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !is_valid {
            return Err(StatusDomainError::InvalidSlug(raw));
        }
        Ok(Self(normalized))
    }

    /// Wraps a slug read from a task or another client, keeping it verbatim.
    ///
    /// Only surrounding whitespace is removed, so `"In Review"` stays
    /// `"In Review"` and lands in no column.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::InvalidSlug`] when the value is blank.
    pub fn from_stored(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StatusDomainError::InvalidSlug(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Derives a slug from a display name.
    ///
    /// Runs of characters outside `[a-z0-9]` collapse into one underscore, so
    /// `"In Progress"` becomes `in_progress`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::InvalidSlug`] when the name has no
    /// alphanumeric characters.
    pub fn from_name(name: &str) -> Result<Self, StatusDomainError> {
        let mut slug = String::with_capacity(name.len());
        for c in name.trim().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('_') {
                slug.push('_');
            }
        }
        let trimmed = slug.trim_end_matches('_');
        if trimmed.is_empty() {
            return Err(StatusDomainError::InvalidSlug(name.to_owned()));
        }
        Self::new(trimmed)
    }

    /// Returns the slug as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StatusSlug {
    type Error = StatusDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_stored(value)
    }
}

impl From<StatusSlug> for String {
    fn from(value: StatusSlug) -> Self {
        value.0
    }
}

impl AsRef<str> for StatusSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
