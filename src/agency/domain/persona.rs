//! Audience persona record.

use super::fields::{non_blank, normalize_name};
use super::{AgencyDomainError, AgencyRecord, ClientId, PersonaId};
use crate::workspace::domain::WorkspaceId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A target audience profile used to steer generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    id: PersonaId,
    workspace_id: WorkspaceId,
    client_id: Option<ClientId>,
    name: String,
    description: Option<String>,
    goals: Vec<String>,
    pain_points: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Persona {
    /// Creates a persona with only a name.
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
            id: PersonaId::new(),
            workspace_id,
            client_id: None,
            name: normalize_name(Self::KIND, name)?,
            description: None,
            goals: Vec::new(),
            pain_points: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Links the persona to a client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the description; blank clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description);
        self
    }

    /// Appends a goal; blanks are ignored.
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.extend(non_blank(goal));
        self
    }

    /// Appends a pain point; blanks are ignored.
    #[must_use]
    pub fn with_pain_point(mut self, pain_point: impl Into<String>) -> Self {
        self.pain_points.extend(non_blank(pain_point));
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the goals.
    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Returns the pain points.
    #[must_use]
    pub fn pain_points(&self) -> &[String] {
        &self.pain_points
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

    /// Renders the persona as prompt context for content generation.
    #[must_use]
    pub fn prompt_context(&self) -> String {
        let mut lines = vec![format!("Persona: {}", self.name)];
        lines.extend(self.description.iter().cloned());
        if !self.goals.is_empty() {
            lines.push(format!("Goals: {}", self.goals.join("; ")));
        }
        if !self.pain_points.is_empty() {
            lines.push(format!("Pain points: {}", self.pain_points.join("; ")));
        }
        lines.join("\n")
    }
}

impl AgencyRecord for Persona {
    type Id = PersonaId;

    const KIND: &'static str = "persona";

    fn id(&self) -> PersonaId {
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
