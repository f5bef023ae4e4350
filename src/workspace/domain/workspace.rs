//! Workspace aggregate root.

use super::{WorkspaceDomainError, WorkspaceId};
use crate::property::domain::PropertyDefinition;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Workspace aggregate root.
///
/// The task property schema lives on the workspace as an ordered array rather
/// than in its own table; it is read and written as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    property_definitions: Vec<PropertyDefinition>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedWorkspaceData {
    /// Persisted workspace identifier.
    pub id: WorkspaceId,
    /// Persisted display name.
    pub name: String,
    /// Persisted task property schema.
    pub property_definitions: Vec<PropertyDefinition>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Creates a new workspace with an empty property schema.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyName`] when the name is blank.
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Result<Self, WorkspaceDomainError> {
        let name = normalize_name(name.into())?;
        let timestamp = clock.utc();
        Ok(Self {
            id: WorkspaceId::new(),
            name,
            property_definitions: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a workspace from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedWorkspaceData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            property_definitions: data.property_definitions,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub const fn id(&self) -> WorkspaceId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task property schema.
    #[must_use]
    pub fn property_definitions(&self) -> &[PropertyDefinition] {
        &self.property_definitions
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyName`] when the name is blank.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), WorkspaceDomainError> {
        self.name = normalize_name(name.into())?;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Replaces the whole property schema.
    pub fn replace_property_definitions(
        &mut self,
        definitions: Vec<PropertyDefinition>,
        clock: &impl Clock,
    ) {
        self.property_definitions = definitions;
        self.updated_at = clock.utc();
    }
}

fn normalize_name(name: String) -> Result<String, WorkspaceDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(WorkspaceDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
