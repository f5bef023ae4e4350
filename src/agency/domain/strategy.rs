//! Strategy document record.

use super::fields::{non_blank, normalize_name};
use super::{AgencyDomainError, AgencyRecord, ClientId, StrategyId};
use crate::workspace::domain::WorkspaceId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Marketing strategy for a client: objectives and channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    id: StrategyId,
    workspace_id: WorkspaceId,
    client_id: Option<ClientId>,
    title: String,
    objectives: Vec<String>,
    channels: Vec<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Strategy {
    /// Creates a strategy with only a title.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyDomainError::EmptyName`] when the title is blank.
    pub fn new(
        workspace_id: WorkspaceId,
        title: &str,
        clock: &impl Clock,
    ) -> Result<Self, AgencyDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: StrategyId::new(),
            workspace_id,
            client_id: None,
            title: normalize_name(Self::KIND, title)?,
            objectives: Vec::new(),
            channels: Vec::new(),
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Links the strategy to a client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Replaces the objectives, dropping blanks.
    #[must_use]
    pub fn with_objectives(mut self, objectives: impl IntoIterator<Item = String>) -> Self {
        self.objectives = objectives.into_iter().filter_map(non_blank).collect();
        self
    }

    /// Replaces the channels, dropping blanks.
    #[must_use]
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = String>) -> Self {
        self.channels = channels.into_iter().filter_map(non_blank).collect();
        self
    }

    /// Sets free-form notes; blank clears them.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_blank(notes);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the objectives.
    #[must_use]
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    /// Returns the channels.
    #[must_use]
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
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
}

impl AgencyRecord for Strategy {
    type Id = StrategyId;

    const KIND: &'static str = "strategy";

    fn id(&self) -> StrategyId {
        self.id
    }

    fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }

    fn label(&self) -> &str {
        &self.title
    }
}
