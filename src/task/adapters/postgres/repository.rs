//! `PostgreSQL` repository implementation for tasks.

use super::{models::TaskRow, schema::tasks};
use crate::agency::domain::ProjectId;
use crate::persistence::{PgPool, run_blocking};
use crate::property::domain::TaskProperties;
use crate::status::domain::StatusSlug;
use crate::task::{
    domain::{
        AiScore, ContentDocument, PersistedTaskData, RecordVersion, Task, TaskId, TaskPriority,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::workspace::domain::{UserId, WorkspaceId};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_row(task)?;
        run_blocking(
            &self.pool,
            |err| TaskRepositoryError::persistence(err),
            move |connection| {
                diesel::insert_into(tasks::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
        )
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_row(task)?;
        run_blocking(
            &self.pool,
            |err| TaskRepositoryError::persistence(err),
            move |connection| {
                let affected = diesel::update(tasks::table.find(row.id))
                    .set(&row)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                if affected == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }
                Ok(())
            },
        )
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        run_blocking(
            &self.pool,
            |err| TaskRepositoryError::persistence(err),
            move |connection| {
                let row = diesel::delete(tasks::table.find(id.into_inner()))
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?
                    .ok_or(TaskRepositoryError::NotFound(id))?;
                row_to_task(row)
            },
        )
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        run_blocking(
            &self.pool,
            |err| TaskRepositoryError::persistence(err),
            move |connection| {
                let row = tasks::table
                    .find(id.into_inner())
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                row.map(row_to_task).transpose()
            },
        )
        .await
    }

    async fn list_for_workspace(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(
            &self.pool,
            |err| TaskRepositoryError::persistence(err),
            move |connection| {
                let rows = tasks::table
                    .filter(tasks::workspace_id.eq(workspace_id.into_inner()))
                    .order((tasks::created_at.desc(), tasks::id.desc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                rows.into_iter().map(row_to_task).collect()
            },
        )
        .await
    }
}

pub(super) fn to_row(task: &Task) -> TaskRepositoryResult<TaskRow> {
    let properties =
        serde_json::to_value(task.properties()).map_err(TaskRepositoryError::persistence)?;
    let version =
        i64::try_from(task.version().value()).map_err(TaskRepositoryError::persistence)?;
    Ok(TaskRow {
        id: task.id().into_inner(),
        workspace_id: task.workspace_id().into_inner(),
        title: task.title().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().map(|priority| priority.as_str().to_owned()),
        assignee_id: task.assignee().map(UserId::into_inner),
        project_id: task.project_id().map(ProjectId::into_inner),
        due_date: task.due_date(),
        properties,
        content_blocks: task.content().as_value().clone(),
        ai_score: task.ai_score().map(|score| i16::from(score.value())),
        ai_feedback: task.ai_feedback().map(str::to_owned),
        version,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        workspace_id,
        title,
        status,
        priority,
        assignee_id,
        project_id,
        due_date,
        properties,
        content_blocks,
        ai_score,
        ai_feedback,
        version,
        created_at,
        updated_at,
    } = row;

    let properties = if properties.is_null() {
        TaskProperties::new()
    } else {
        serde_json::from_value(properties).map_err(TaskRepositoryError::persistence)?
    };
    let ai_score = ai_score
        .map(|score| {
            let raw = u16::try_from(score).map_err(TaskRepositoryError::persistence)?;
            AiScore::new(raw).map_err(TaskRepositoryError::persistence)
        })
        .transpose()?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        workspace_id: WorkspaceId::from_uuid(workspace_id),
        title,
        status: StatusSlug::from_stored(status).map_err(TaskRepositoryError::persistence)?,
        priority: priority.as_deref().map(TaskPriority::parse),
        assignee: assignee_id.map(UserId::from_uuid),
        project_id: project_id.map(ProjectId::from_uuid),
        due_date,
        properties,
        content: ContentDocument::from_value(content_blocks),
        ai_score,
        ai_feedback,
        version: RecordVersion::new(
            u64::try_from(version).map_err(TaskRepositoryError::persistence)?,
        ),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
