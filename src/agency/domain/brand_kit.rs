//! Brand kit record.

use super::fields::{non_blank, normalize_name};
use super::{AgencyDomainError, AgencyRecord, BrandKitId, ClientId};
use crate::workspace::domain::{HexColor, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Colours, fonts and voice for one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandKit {
    id: BrandKitId,
    workspace_id: WorkspaceId,
    client_id: Option<ClientId>,
    name: String,
    colors: Vec<HexColor>,
    fonts: Vec<String>,
    voice: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BrandKit {
    /// Creates an empty brand kit.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyDomainError::EmptyName`] when the name is blank.
    pub fn new(
        workspace_id: WorkspaceId,
        name: &str,
        clock: &impl Clock,
    ) -> Result<Self, AgencyDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: BrandKitId::new(),
            workspace_id,
            client_id: None,
            name: normalize_name(Self::KIND, name)?,
            colors: Vec::new(),
            fonts: Vec::new(),
            voice: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Links the kit to a client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Appends a palette colour unless already present.
    #[must_use]
    pub fn with_color(mut self, color: HexColor) -> Self {
        if !self.colors.contains(&color) {
            self.colors.push(color);
        }
        self
    }

    /// Appends a font family; blanks are ignored.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        if let Some(family) = non_blank(font) {
            self.fonts.push(family);
        }
        self
    }

    /// Sets the tone of voice; blank clears it.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = non_blank(voice);
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the palette.
    #[must_use]
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Returns the font families.
    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Returns the tone of voice.
    #[must_use]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
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

    /// Replaces the palette.
    pub fn replace_colors(&mut self, colors: Vec<HexColor>, clock: &impl Clock) {
        self.colors = colors;
        self.updated_at = clock.utc();
    }
}

impl AgencyRecord for BrandKit {
    type Id = BrandKitId;

    const KIND: &'static str = "brand kit";

    fn id(&self) -> BrandKitId {
        self.id
    }

    fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
