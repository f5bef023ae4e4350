//! Diesel row models for workspace persistence.

use super::schema::workspaces;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for workspace records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workspaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkspaceRow {
    /// Workspace identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Property schema JSON array.
    pub task_property_definitions: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for workspace records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workspaces)]
pub struct NewWorkspaceRow {
    /// Workspace identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Property schema JSON array.
    pub task_property_definitions: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
