//! Change-publishing decorator that turns any task repository into a feed.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::task::{
    domain::{Task, TaskChange, TaskId},
    ports::{TaskChangeFeed, TaskRepository, TaskRepositoryResult, TaskSubscription},
};
use crate::workspace::domain::WorkspaceId;

/// Wraps a [`TaskRepository`] and broadcasts a [`TaskChange`] after every
/// successful write.
///
/// All clones share one channel, so every store or service holding a clone
/// sees the others' writes as realtime events.
#[derive(Debug)]
pub struct RealtimeTaskRepository<R> {
    inner: Arc<R>,
    sender: broadcast::Sender<TaskChange>,
}

impl<R> Clone for RealtimeTaskRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            sender: self.sender.clone(),
        }
    }
}

impl<R> RealtimeTaskRepository<R>
where
    R: TaskRepository,
{
    /// Wraps `inner` with a broadcast buffer of `capacity` events.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(inner: R, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Arc::new(inner),
            sender,
        }
    }

    /// Publishes a change that did not pass through this repository, such as
    /// one relayed from another process.
    pub fn publish(&self, change: TaskChange) {
        let workspace_id = change.workspace_id();
        if self.sender.send(change).is_err() {
            tracing::debug!(%workspace_id, "task change dropped; no subscribers");
        }
    }

    /// Returns the number of open subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl<R> TaskRepository for RealtimeTaskRepository<R>
where
    R: TaskRepository,
{
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.store(task).await?;
        self.publish(TaskChange::Insert(task.clone()));
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.inner.update(task).await?;
        self.publish(TaskChange::Update(task.clone()));
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let removed = self.inner.delete(id).await?;
        self.publish(TaskChange::Delete {
            workspace_id: removed.workspace_id(),
            id,
        });
        Ok(removed)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn list_for_workspace(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list_for_workspace(workspace_id).await
    }
}

impl<R> TaskChangeFeed for RealtimeTaskRepository<R>
where
    R: TaskRepository,
{
    fn subscribe(&self, workspace_id: WorkspaceId) -> TaskSubscription {
        TaskSubscription::new(workspace_id, self.sender.subscribe())
    }
}
