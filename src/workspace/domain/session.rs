//! Explicit workspace-scoped session handle.

use super::{UserId, WorkspaceId};
use serde::{Deserialize, Serialize};

/// The workspace and member on whose behalf a service call runs.
///
/// Every store and service takes a session rather than looking up an
/// ambient current workspace, so a single process can serve many tenants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceSession {
    workspace_id: WorkspaceId,
    user_id: UserId,
}

impl WorkspaceSession {
    /// Creates a session for `user_id` acting inside `workspace_id`.
    #[must_use]
    pub const fn new(workspace_id: WorkspaceId, user_id: UserId) -> Self {
        Self {
            workspace_id,
            user_id,
        }
    }

    /// Returns the scoped workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the acting member.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns `true` when `workspace_id` is the session's workspace.
    #[must_use]
    pub fn owns(&self, workspace_id: WorkspaceId) -> bool {
        self.workspace_id == workspace_id
    }
}
