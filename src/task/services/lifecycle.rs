//! Remote task mutations scoped to a workspace session.

use crate::agency::domain::ProjectId;
use crate::property::domain::{PropertyDefinition, PropertyValue};
use crate::status::domain::StatusSlug;
use crate::task::{
    domain::{
        ContentAnalysis, ContentDocument, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch,
        TaskPriority,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::workspace::domain::{UserId, WorkspaceSession};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    title: String,
    status: String,
    priority: Option<TaskPriority>,
    assignee: Option<UserId>,
    project_id: Option<ProjectId>,
    due_date: Option<DateTime<Utc>>,
    content: Option<ContentDocument>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            priority: None,
            assignee: None,
            project_id: None,
            due_date: None,
            content: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the owning project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial content.
    #[must_use]
    pub fn with_content(mut self, content: ContentDocument) -> Self {
        self.content = Some(content);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Each call is one single-row mutation that returns the written row. A task
/// outside the session's workspace is reported as not found.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Fetches the workspace's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn fetch_tasks(&self, session: &WorkspaceSession) -> TaskServiceResult<Vec<Task>> {
        Ok(self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?)
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is missing or
    /// belongs to another workspace.
    pub async fn find_task(&self, session: &WorkspaceSession, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|task| session.owns(task.workspace_id()))
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Creates a task at version 1.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title or blank
    /// status, or [`TaskServiceError::Repository`] when the insert fails.
    pub async fn create_task(
        &self,
        session: &WorkspaceSession,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            status: status_label,
            priority,
            assignee,
            project_id,
            due_date,
            content,
        } = request;
        let status = StatusSlug::from_stored(status_label).map_err(TaskDomainError::from)?;
        let draft = TaskDraft {
            priority,
            assignee,
            project_id,
            due_date,
            content: content.unwrap_or_default(),
            ..TaskDraft::new(title, status)
        };

        let task = Task::new(session.workspace_id(), draft, &*self.clock)?;
        self.repository.store(&task).await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            task_id = %task.id(),
            status = %task.status(),
            "task created"
        );
        Ok(task)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the task is not found, the patch is
    /// invalid, or the write fails.
    pub async fn update_task(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| task.apply_patch(patch, clock))
            .await
    }

    /// Moves a task to another status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task is not found or
    /// the write fails.
    pub async fn update_status(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        status: StatusSlug,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| {
            task.set_status(status, clock);
            Ok(())
        })
        .await
    }

    /// Sets or clears the due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task is not found or
    /// the write fails.
    pub async fn update_due_date(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        due_date: Option<DateTime<Utc>>,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| {
            task.set_due_date(due_date, clock);
            Ok(())
        })
        .await
    }

    /// Replaces the content blocks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task is not found or
    /// the write fails.
    pub async fn set_content(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        content: ContentDocument,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| {
            task.set_content(content, clock);
            Ok(())
        })
        .await
    }

    /// Stores an AI review result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task is not found or
    /// the write fails.
    pub async fn record_analysis(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        analysis: ContentAnalysis,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| {
            task.record_analysis(analysis, clock);
            Ok(())
        })
        .await
    }

    /// Writes or clears one custom property value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when `value` does not fit
    /// `definition`, or [`TaskServiceError::Repository`] when the task is not
    /// found or the write fails.
    pub async fn set_property(
        &self,
        session: &WorkspaceSession,
        id: TaskId,
        definition: &PropertyDefinition,
        value: Option<PropertyValue>,
    ) -> TaskServiceResult<Task> {
        self.mutate(session, id, |task, clock| {
            task.set_property(definition, value, clock)
        })
        .await
    }

    /// Deletes a task and returns the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task is not found or
    /// the delete fails.
    pub async fn delete_task(&self, session: &WorkspaceSession, id: TaskId) -> TaskServiceResult<Task> {
        self.find_task(session, id).await?;
        let removed = self.repository.delete(id).await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            task_id = %id,
            "task deleted"
        );
        Ok(removed)
    }

    async fn mutate<F>(&self, session: &WorkspaceSession, id: TaskId, change: F) -> TaskServiceResult<Task>
    where
        F: FnOnce(&mut Task, &C) -> Result<(), TaskDomainError>,
    {
        let mut task = self.find_task(session, id).await?;
        change(&mut task, &*self.clock)?;
        self.repository.update(&task).await?;
        tracing::debug!(
            workspace_id = %session.workspace_id(),
            task_id = %id,
            version = %task.version(),
            "task updated"
        );
        Ok(task)
    }
}
