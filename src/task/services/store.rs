//! Local task list kept consistent with remote writes and realtime events.

use super::{CreateTaskRequest, TaskService, TaskServiceResult};
use crate::notify::{Notice, Notifier};
use crate::status::domain::StatusSlug;
use crate::task::{
    domain::{Task, TaskChange, TaskId, TaskPatch},
    ports::{TaskChangeFeed, TaskRepository},
};
use crate::workspace::domain::{WorkspaceId, WorkspaceSession};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::task::JoinHandle;

/// Deleted ids remembered to drop late events; the oldest are forgotten first.
const TOMBSTONE_LIMIT: usize = 512;

/// Recently deleted task ids. Ids are never reused, so only events racing a
/// recent delete need suppressing.
#[derive(Debug, Default)]
struct Tombstones {
    ids: HashSet<TaskId>,
    order: VecDeque<TaskId>,
}

impl Tombstones {
    fn contains(&self, id: TaskId) -> bool {
        self.ids.contains(&id)
    }

    fn insert(&mut self, id: TaskId) {
        if !self.ids.insert(id) {
            return;
        }
        self.order.push_back(id);
        while self.order.len() > TOMBSTONE_LIMIT {
            if let Some(oldest) = self.order.pop_front() {
                self.ids.remove(&oldest);
            }
        }
    }

    fn clear(&mut self) {
        self.ids.clear();
        self.order.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }
}

#[derive(Debug, Default)]
struct LocalTasks {
    tasks: Vec<Task>,
    tombstones: Tombstones,
}

impl LocalTasks {
    /// Inserts or replaces `incoming` when it is newer than the local copy.
    fn merge(&mut self, incoming: Task) -> bool {
        if self.tombstones.contains(incoming.id()) {
            return false;
        }
        match self.tasks.iter_mut().find(|task| task.id() == incoming.id()) {
            Some(existing) if incoming.is_newer_than(existing) => {
                *existing = incoming;
                true
            }
            Some(_) => false,
            None => {
                self.tasks.insert(0, incoming);
                true
            }
        }
    }

    fn remove(&mut self, id: TaskId) -> bool {
        self.tombstones.insert(id);
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    fn apply(&mut self, workspace_id: WorkspaceId, change: TaskChange) -> bool {
        if change.workspace_id() != workspace_id {
            return false;
        }
        match change {
            TaskChange::Insert(task) | TaskChange::Update(task) => self.merge(task),
            TaskChange::Delete { id, .. } => self.remove(id),
        }
    }
}

type SharedTasks = Arc<RwLock<LocalTasks>>;

fn write(state: &SharedTasks) -> std::sync::RwLockWriteGuard<'_, LocalTasks> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory task list for one workspace session.
///
/// Local writes and realtime events go through the same merge: an incoming
/// copy replaces the local one only when its `(version, updated_at)` is
/// greater, and a delete always wins. A failed mutation is logged, raised as
/// an error notice, and leaves the list untouched.
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskService<R, C>,
    session: WorkspaceSession,
    notifier: Arc<dyn Notifier>,
    state: SharedTasks,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an empty store bound to `session`.
    #[must_use]
    pub fn new(
        service: TaskService<R, C>,
        session: WorkspaceSession,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            session,
            notifier,
            state: SharedTasks::default(),
        }
    }

    /// Returns the session the store is bound to.
    #[must_use]
    pub const fn session(&self) -> &WorkspaceSession {
        &self.session
    }

    /// Returns a snapshot of the local list, newest first.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .clone()
    }

    /// Returns the local copy of one task.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    /// Replaces the local list with a fresh fetch and returns its length.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after notifying the user; the previous list
    /// is kept.
    pub async fn load(&self) -> TaskServiceResult<usize> {
        match self.service.fetch_tasks(&self.session).await {
            Ok(tasks) => {
                let count = tasks.len();
                let mut state = write(&self.state);
                state.tasks = tasks;
                state.tombstones.clear();
                tracing::debug!(workspace_id = %self.session.workspace_id(), count, "tasks loaded");
                Ok(count)
            }
            Err(err) => Err(self.fail("load tasks", err)),
        }
    }

    /// Creates a task and prepends it locally.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying the user.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let result = self.service.create_task(&self.session, request).await;
        self.settle("create task", result)
    }

    /// Applies a partial update and replaces the local copy.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying the user.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let result = self.service.update_task(&self.session, id, patch).await;
        self.settle("update task", result)
    }

    /// Moves a task to another status and replaces the local copy.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying the user.
    pub async fn update_status(&self, id: TaskId, status: StatusSlug) -> TaskServiceResult<Task> {
        let result = self.service.update_status(&self.session, id, status).await;
        self.settle("update task status", result)
    }

    /// Sets or clears a due date and replaces the local copy.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying the user.
    pub async fn update_due_date(
        &self,
        id: TaskId,
        due_date: Option<DateTime<Utc>>,
    ) -> TaskServiceResult<Task> {
        let result = self
            .service
            .update_due_date(&self.session, id, due_date)
            .await;
        self.settle("update due date", result)
    }

    /// Deletes a task and removes it locally.
    ///
    /// # Errors
    ///
    /// Returns the service error after notifying the user.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        match self.service.delete_task(&self.session, id).await {
            Ok(_) => {
                write(&self.state).remove(id);
                Ok(())
            }
            Err(err) => Err(self.fail("delete task", err)),
        }
    }

    /// Reconciles one change-feed event. Returns `true` when the list changed.
    #[must_use]
    pub fn apply_change(&self, change: TaskChange) -> bool {
        write(&self.state).apply(self.session.workspace_id(), change)
    }

    /// Starts applying `feed` events for this session's workspace.
    ///
    /// Must be called from within a Tokio runtime. The subscription lives
    /// until the returned handle is dropped or unsubscribed.
    #[must_use = "dropping the handle ends the subscription"]
    pub fn subscribe<F>(&self, feed: &F) -> SyncHandle
    where
        F: TaskChangeFeed + ?Sized,
    {
        let workspace_id = self.session.workspace_id();
        let mut subscription = feed.subscribe(workspace_id);
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            while let Some(change) = subscription.next().await {
                let task_id = change.task_id();
                let applied = write(&state).apply(workspace_id, change);
                tracing::debug!(%workspace_id, %task_id, applied, "realtime change");
            }
            tracing::debug!(%workspace_id, "task change feed closed");
        });
        tracing::debug!(%workspace_id, "subscribed to task changes");
        SyncHandle { task: Some(task) }
    }

    fn settle(&self, action: &'static str, result: TaskServiceResult<Task>) -> TaskServiceResult<Task> {
        match result {
            Ok(task) => {
                write(&self.state).merge(task.clone());
                Ok(task)
            }
            Err(err) => Err(self.fail(action, err)),
        }
    }

    fn fail<E: fmt::Display>(&self, action: &'static str, err: E) -> E {
        tracing::warn!(
            workspace_id = %self.session.workspace_id(),
            action,
            error = %err,
            "task mutation failed"
        );
        self.notifier
            .notify(Notice::error(format!("Could not {action}: {err}")));
        err
    }
}

/// Handle for a running realtime subscription.
///
/// Dropping the handle aborts the subscription task.
#[derive(Debug)]
pub struct SyncHandle {
    task: Option<JoinHandle<()>>,
}

impl SyncHandle {
    /// Returns `true` while the subscription task is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the subscription and waits for its task to wind down.
    pub async fn unsubscribe(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            match task.await {
                Err(err) if !err.is_cancelled() => {
                    tracing::warn!(error = %err, "task subscription ended abnormally");
                }
                _ => {}
            }
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
