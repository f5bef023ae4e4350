//! Realtime change events for the task table.

use super::{Task, TaskId};
use crate::workspace::domain::WorkspaceId;
use serde::{Deserialize, Serialize};

/// One row-level change pushed by the change feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "UPPERCASE")]
pub enum TaskChange {
    /// A task was created.
    Insert(Task),
    /// A task was modified.
    Update(Task),
    /// A task was removed.
    Delete {
        /// Workspace the task belonged to.
        workspace_id: WorkspaceId,
        /// Removed task.
        id: TaskId,
    },
}

impl TaskChange {
    /// Returns the workspace the change belongs to.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        match self {
            Self::Insert(task) | Self::Update(task) => task.workspace_id(),
            Self::Delete { workspace_id, .. } => *workspace_id,
        }
    }

    /// Returns the affected task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Insert(task) | Self::Update(task) => task.id(),
            Self::Delete { id, .. } => *id,
        }
    }
}
