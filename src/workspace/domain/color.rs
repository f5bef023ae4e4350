//! Validated `#rrggbb` colour used by statuses and brand kits.

use super::WorkspaceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase six-digit hex colour, always prefixed with `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Creates a validated colour.
    ///
    /// Accepts `#rgb` shorthand and `#rrggbb`, in any case, and normalizes to
    /// lowercase `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::InvalidColor`] when the value is not a
    /// hex colour.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkspaceDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(WorkspaceDomainError::InvalidColor(raw));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WorkspaceDomainError::InvalidColor(raw));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_owned(),
            _ => return Err(WorkspaceDomainError::InvalidColor(raw)),
        };

        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = WorkspaceDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
