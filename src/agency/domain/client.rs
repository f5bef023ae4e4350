//! Agency client record.

use super::fields::{non_blank, normalize_name};
use super::{AgencyDomainError, AgencyRecord, ClientId};
use crate::workspace::domain::WorkspaceId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A brand the agency works for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    workspace_id: WorkspaceId,
    name: String,
    industry: Option<String>,
    website: Option<String>,
    contact_email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a client with only a name.
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
            id: ClientId::new(),
            workspace_id,
            name: normalize_name(Self::KIND, name)?,
            industry: None,
            website: None,
            contact_email: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Sets the industry; blank clears it.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = non_blank(industry);
        self
    }

    /// Sets the website; blank clears it.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = non_blank(website);
        self
    }

    /// Sets the contact email; blank clears it.
    #[must_use]
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = non_blank(email);
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the industry.
    #[must_use]
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Returns the website.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Returns the contact email.
    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
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

    /// Renames the client.
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

impl AgencyRecord for Client {
    type Id = ClientId;

    const KIND: &'static str = "client";

    fn id(&self) -> ClientId {
        self.id
    }

    fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    fn client_id(&self) -> Option<ClientId> {
        Some(self.id)
    }

    fn label(&self) -> &str {
        &self.name
    }
}
