//! Writes collaborator output back onto tasks.

use crate::agency::domain::{AgencyRecord, Persona};
use crate::assistant::domain::{AnalyzeContentRequest, AutoPlanRequest, GenerateContentRequest};
use crate::assistant::ports::{AssistantError, ContentAssistant};
use crate::saga::{Saga, SagaError, SagaStep};
use crate::status::domain::StatusSlug;
use crate::task::domain::{ContentDocument, Task, TaskId};
use crate::task::ports::TaskRepository;
use crate::task::services::{CreateTaskRequest, TaskService, TaskServiceError};
use crate::workspace::domain::WorkspaceSession;
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for collaborator flows.
#[derive(Debug, Error)]
pub enum AssistantServiceError {
    /// The collaborator call failed.
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// Reading or writing the task failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),

    /// The collaborator returned an empty draft.
    #[error("assistant returned an empty draft for task {0}")]
    EmptyDraft(TaskId),

    /// The task has no content to review.
    #[error("task {0} has no content to review")]
    NoContent(TaskId),

    /// Creating the planned tasks failed and was rolled back.
    #[error("auto-plan failed: {0}")]
    Plan(#[source] Box<SagaError<TaskServiceError>>),
}

/// Result type for collaborator flows.
pub type AssistantServiceResult<T> = Result<T, AssistantServiceError>;

/// Drafts, reviews and plans tasks through a [`ContentAssistant`].
pub struct AssistantService<A, R, C>
where
    A: ContentAssistant,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    assistant: Arc<A>,
    tasks: TaskService<R, C>,
}

impl<A, R, C> Clone for AssistantService<A, R, C>
where
    A: ContentAssistant,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            assistant: Arc::clone(&self.assistant),
            tasks: self.tasks.clone(),
        }
    }
}

impl<A, R, C> AssistantService<A, R, C>
where
    A: ContentAssistant,
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a collaborator service.
    #[must_use]
    pub const fn new(assistant: Arc<A>, tasks: TaskService<R, C>) -> Self {
        Self { assistant, tasks }
    }

    /// Generates content for a task and stores it as the task's content.
    ///
    /// Persona details are appended to `context` when a persona is given.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantServiceError`] when the task is missing, the
    /// collaborator fails or returns nothing, or the write fails.
    pub async fn draft_content(
        &self,
        session: &WorkspaceSession,
        task_id: TaskId,
        context: &str,
        persona: Option<&Persona>,
    ) -> AssistantServiceResult<Task> {
        let task = self.tasks.find_task(session, task_id).await?;
        let request = GenerateContentRequest {
            title: task.title().to_owned(),
            context: compose_context(context, persona),
            persona_id: persona.map(|found| found.id()),
        };

        let draft = self.assistant.generate(&request).await?;
        if draft.trim().is_empty() {
            return Err(AssistantServiceError::EmptyDraft(task_id));
        }

        let updated = self
            .tasks
            .set_content(session, task_id, ContentDocument::from_plain_text(&draft))
            .await?;
        tracing::info!(task_id = %task_id, "draft stored");
        Ok(updated)
    }

    /// Scores the task's content and stores the score and feedback.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantServiceError::NoContent`] for a task without
    /// content, or another variant when the call or the write fails.
    pub async fn review_content(
        &self,
        session: &WorkspaceSession,
        task_id: TaskId,
    ) -> AssistantServiceResult<Task> {
        let task = self.tasks.find_task(session, task_id).await?;
        let content = task.content().plain_text();
        if content.trim().is_empty() {
            return Err(AssistantServiceError::NoContent(task_id));
        }

        let request = AnalyzeContentRequest {
            title: task.title().to_owned(),
            content,
        };
        let analysis = self.assistant.analyze(&request).await?;
        let score = analysis.score.value();
        let updated = self.tasks.record_analysis(session, task_id, analysis).await?;
        tracing::info!(task_id = %task_id, score, "content reviewed");
        Ok(updated)
    }

    /// Expands a brief into tasks that start in `status`.
    ///
    /// Planned tasks with a blank title are skipped. The remaining tasks are
    /// created in order; if one fails, the tasks already created are deleted.
    /// Returns the number of tasks created.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantServiceError::Assistant`] when the plan cannot be
    /// fetched, or [`AssistantServiceError::Plan`] when creation fails.
    pub async fn auto_plan(
        &self,
        session: &WorkspaceSession,
        request: &AutoPlanRequest,
        status: &StatusSlug,
    ) -> AssistantServiceResult<usize> {
        let planned = self.assistant.auto_plan(request).await?;

        let mut saga: Saga<PlanContext, TaskServiceError> = Saga::new("auto-plan");
        for (index, item) in planned.into_iter().enumerate() {
            if item.title.trim().is_empty() {
                tracing::warn!(index, "skipping planned task without a title");
                continue;
            }
            let mut create = CreateTaskRequest::new(item.title, status.as_str());
            if let Some(priority) = item.priority {
                create = create.with_priority(priority);
            }
            if let Some(due_date) = item.due_date {
                create = create.with_due_date(due_date);
            }
            if let Some(project_id) = request.project_id {
                create = create.with_project(project_id);
            }
            saga = saga.step(CreatePlannedTask {
                name: format!("create task {}", index + 1),
                tasks: self.tasks.clone(),
                request: create,
            });
        }

        let mut context = PlanContext {
            session: *session,
            created: Vec::new(),
        };
        saga.run(&mut context)
            .await
            .map_err(|err| AssistantServiceError::Plan(Box::new(err)))?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            created = context.created.len(),
            "auto-plan applied"
        );
        Ok(context.created.len())
    }
}

fn compose_context(context: &str, persona: Option<&Persona>) -> String {
    let trimmed = context.trim();
    let Some(found) = persona else {
        return trimmed.to_owned();
    };
    if trimmed.is_empty() {
        return found.prompt_context();
    }
    format!("{trimmed}\n\n{}", found.prompt_context())
}

struct PlanContext {
    session: WorkspaceSession,
    created: Vec<TaskId>,
}

struct CreatePlannedTask<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    name: String,
    tasks: TaskService<R, C>,
    request: CreateTaskRequest,
}

#[async_trait]
impl<R, C> SagaStep<PlanContext, TaskServiceError> for CreatePlannedTask<R, C>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, context: &mut PlanContext) -> Result<(), TaskServiceError> {
        let task = self
            .tasks
            .create_task(&context.session, self.request.clone())
            .await?;
        context.created.push(task.id());
        Ok(())
    }

    async fn compensate(&self, context: &mut PlanContext) -> Result<(), TaskServiceError> {
        let Some(id) = context.created.pop() else {
            return Ok(());
        };
        self.tasks.delete_task(&context.session, id).await?;
        Ok(())
    }
}
