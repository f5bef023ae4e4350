//! Realtime change feed port for the task table.

use crate::task::domain::TaskChange;
use crate::workspace::domain::WorkspaceId;
use tokio::sync::broadcast::{self, error::RecvError};

/// Source of row-level task changes.
pub trait TaskChangeFeed: Send + Sync {
    /// Opens a subscription that yields only `workspace_id`'s changes.
    fn subscribe(&self, workspace_id: WorkspaceId) -> TaskSubscription;
}

/// Workspace-filtered receiver over a broadcast channel of task changes.
#[derive(Debug)]
pub struct TaskSubscription {
    workspace_id: WorkspaceId,
    receiver: broadcast::Receiver<TaskChange>,
}

impl TaskSubscription {
    /// Wraps a broadcast receiver, filtering to one workspace.
    #[must_use]
    pub const fn new(workspace_id: WorkspaceId, receiver: broadcast::Receiver<TaskChange>) -> Self {
        Self {
            workspace_id,
            receiver,
        }
    }

    /// Returns the subscribed workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Waits for the next change in the subscribed workspace.
    ///
    /// Returns `None` once the feed is closed. A subscriber that falls behind
    /// skips the overwritten events and keeps going.
    pub async fn next(&mut self) -> Option<TaskChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.workspace_id() == self.workspace_id => return Some(change),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        workspace_id = %self.workspace_id,
                        skipped,
                        "task subscription lagged; skipped events"
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
