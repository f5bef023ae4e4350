//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Row shape shared by queries, inserts and updates.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning workspace.
    pub workspace_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Status slug.
    pub status: String,
    /// Priority label.
    pub priority: Option<String>,
    /// Assigned member.
    pub assignee_id: Option<uuid::Uuid>,
    /// Owning project.
    pub project_id: Option<uuid::Uuid>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Property value document.
    pub properties: Value,
    /// Content blocks.
    pub content_blocks: Value,
    /// AI score.
    pub ai_score: Option<i16>,
    /// AI feedback.
    pub ai_feedback: Option<String>,
    /// Record version.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
