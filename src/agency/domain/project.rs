//! Agency project record.

use super::fields::{non_blank, normalize_name};
use super::{AgencyDomainError, AgencyRecord, ClientId, ProjectId};
use crate::workspace::domain::WorkspaceId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A campaign or engagement that groups tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    workspace_id: WorkspaceId,
    client_id: Option<ClientId>,
    name: String,
    brief: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project with only a name.
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
            id: ProjectId::new(),
            workspace_id,
            client_id: None,
            name: normalize_name(Self::KIND, name)?,
            brief: None,
            start_date: None,
            end_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Links the project to a client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the brief; blank clears it.
    #[must_use]
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = non_blank(brief);
        self
    }

    /// Sets the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyDomainError::InvalidSchedule`] when both dates are set
    /// and the end precedes the start.
    pub fn with_schedule(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, AgencyDomainError> {
        match (start_date, end_date) {
            (Some(start), Some(end)) if end < start => {
                return Err(AgencyDomainError::InvalidSchedule { start, end });
            }
            _ => {}
        }
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(self)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brief.
    #[must_use]
    pub fn brief(&self) -> Option<&str> {
        self.brief.as_deref()
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
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

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyDomainError::EmptyName`] when the name is blank.
    pub fn rename(&mut self, name: &str, clock: &impl Clock) -> Result<(), AgencyDomainError> {
        self.name = normalize_name(Self::KIND, name)?;
        self.updated_at = clock.utc();
        Ok(())
    }
}

impl AgencyRecord for Project {
    type Id = ProjectId;

    const KIND: &'static str = "project";

    fn id(&self) -> ProjectId {
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
