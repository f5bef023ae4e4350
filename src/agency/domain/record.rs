//! Common contract for workspace-scoped agency records.

use super::ClientId;
use crate::workspace::domain::WorkspaceId;
use std::fmt;
use std::hash::Hash;

/// A flat record owned by one workspace.
pub trait AgencyRecord: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Record kind used in logs and errors.
    const KIND: &'static str;

    /// Returns the record identifier.
    fn id(&self) -> Self::Id;

    /// Returns the owning workspace.
    fn workspace_id(&self) -> WorkspaceId;

    /// Returns the owning client, for records that may belong to one.
    fn client_id(&self) -> Option<ClientId>;

    /// Returns the display name or title.
    fn label(&self) -> &str;
}
