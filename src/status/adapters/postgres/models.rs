//! Diesel row models for status registry persistence.

use super::schema::task_statuses;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row shape shared by queries and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = task_statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct StatusRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Owning workspace.
    pub workspace_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Stable slug.
    pub slug: String,
    /// Colour.
    pub color: String,
    /// Column position.
    pub position: i32,
    /// Icon name.
    pub icon: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
