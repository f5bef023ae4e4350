//! Status registry entry.

use super::{DefaultStatus, StatusDomainError, StatusId, StatusSlug};
use crate::workspace::domain::{HexColor, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One pipeline stage in a workspace's status registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    id: StatusId,
    workspace_id: WorkspaceId,
    name: String,
    slug: StatusSlug,
    color: HexColor,
    position: u32,
    icon: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted status entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedStatusData {
    /// Persisted entry identifier.
    pub id: StatusId,
    /// Owning workspace.
    pub workspace_id: WorkspaceId,
    /// Display name.
    pub name: String,
    /// Stable slug.
    pub slug: StatusSlug,
    /// Column colour.
    pub color: HexColor,
    /// Column position.
    pub position: u32,
    /// Optional icon name.
    pub icon: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Direct field update for rename/recolor/re-icon.
///
/// The slug is never patched: tasks reference it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPatch {
    /// New display name.
    pub name: Option<String>,
    /// New colour.
    pub color: Option<HexColor>,
    /// New icon; `Some(None)` clears it.
    pub icon: Option<Option<String>>,
}

impl StatusEntry {
    /// Creates a new registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyName`] when the name is blank.
    pub fn new(
        workspace_id: WorkspaceId,
        name: &str,
        slug: StatusSlug,
        color: HexColor,
        position: u32,
        icon: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, StatusDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: StatusId::new(),
            workspace_id,
            name: normalize_name(name)?,
            slug,
            color,
            position,
            icon: normalize_icon(icon),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Creates an entry from one of the hardcoded defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError`] if the default table is malformed.
    pub fn from_default(
        workspace_id: WorkspaceId,
        default: &DefaultStatus,
        position: u32,
        clock: &impl Clock,
    ) -> Result<Self, StatusDomainError> {
        Self::new(
            workspace_id,
            default.name,
            StatusSlug::new(default.slug)?,
            HexColor::new(default.color)?,
            position,
            Some(default.icon.to_owned()),
            clock,
        )
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedStatusData) -> Self {
        Self {
            id: data.id,
            workspace_id: data.workspace_id,
            name: data.name,
            slug: data.slug,
            color: data.color,
            position: data.position,
            icon: data.icon,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stable slug.
    #[must_use]
    pub const fn slug(&self) -> &StatusSlug {
        &self.slug
    }

    /// Returns the column colour.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }

    /// Returns the column position.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns the icon name, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
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

    /// Applies a rename/recolor/re-icon patch.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyName`] when the new name is blank;
    /// the entry is unchanged in that case.
    pub fn apply_patch(&mut self, patch: StatusPatch, clock: &impl Clock) -> Result<(), StatusDomainError> {
        if let Some(name) = patch.name {
            self.name = normalize_name(&name)?;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(icon) = patch.icon {
            self.icon = normalize_icon(icon);
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Moves the entry to a new column position.
    pub fn set_position(&mut self, position: u32, clock: &impl Clock) {
        self.position = position;
        self.updated_at = clock.utc();
    }
}

fn normalize_name(name: &str) -> Result<String, StatusDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StatusDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

fn normalize_icon(icon: Option<String>) -> Option<String> {
    icon.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
