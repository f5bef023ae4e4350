//! `PostgreSQL` repository implementation for workspaces and their property
//! schema blob.

use super::{
    models::{NewWorkspaceRow, WorkspaceRow},
    schema::workspaces,
};
use crate::persistence::{PgPool, run_blocking};
use crate::property::{
    domain::PropertyDefinition,
    ports::{PropertySchemaError, PropertySchemaRepository, PropertySchemaResult},
};
use crate::workspace::{
    domain::{PersistedWorkspaceData, Workspace, WorkspaceId},
    ports::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult},
};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed workspace repository.
#[derive(Debug, Clone)]
pub struct PostgresWorkspaceRepository {
    pool: PgPool,
}

impl PostgresWorkspaceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn store(&self, workspace: &Workspace) -> WorkspaceRepositoryResult<()> {
        let workspace_id = workspace.id();
        let new_row = to_new_row(workspace).map_err(WorkspaceRepositoryError::persistence)?;
        run_blocking(
            &self.pool,
            |err| WorkspaceRepositoryError::persistence(err),
            move |connection| {
                diesel::insert_into(workspaces::table)
                    .values(&new_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            WorkspaceRepositoryError::DuplicateWorkspace(workspace_id)
                        }
                        _ => WorkspaceRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
        )
        .await
    }

    async fn update(&self, workspace: &Workspace) -> WorkspaceRepositoryResult<()> {
        let row = to_new_row(workspace).map_err(WorkspaceRepositoryError::persistence)?;
        let workspace_id = workspace.id();
        run_blocking(
            &self.pool,
            |err| WorkspaceRepositoryError::persistence(err),
            move |connection| {
                let affected = diesel::update(workspaces::table.filter(workspaces::id.eq(row.id)))
                    .set((
                        workspaces::name.eq(&row.name),
                        workspaces::task_property_definitions.eq(&row.task_property_definitions),
                        workspaces::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(WorkspaceRepositoryError::persistence)?;
                if affected == 0 {
                    return Err(WorkspaceRepositoryError::NotFound(workspace_id));
                }
                Ok(())
            },
        )
        .await
    }

    async fn find_by_id(&self, id: WorkspaceId) -> WorkspaceRepositoryResult<Option<Workspace>> {
        run_blocking(
            &self.pool,
            |err| WorkspaceRepositoryError::persistence(err),
            move |connection| {
                let row = workspaces::table
                    .filter(workspaces::id.eq(id.into_inner()))
                    .select(WorkspaceRow::as_select())
                    .first::<WorkspaceRow>(connection)
                    .optional()
                    .map_err(WorkspaceRepositoryError::persistence)?;
                row.map(|found| row_to_workspace(found).map_err(WorkspaceRepositoryError::persistence))
                    .transpose()
            },
        )
        .await
    }
}

#[async_trait]
impl PropertySchemaRepository for PostgresWorkspaceRepository {
    async fn load(&self, workspace_id: WorkspaceId) -> PropertySchemaResult<Vec<PropertyDefinition>> {
        run_blocking(
            &self.pool,
            |err| PropertySchemaError::persistence(err),
            move |connection| {
                let blob = workspaces::table
                    .filter(workspaces::id.eq(workspace_id.into_inner()))
                    .select(workspaces::task_property_definitions)
                    .first::<serde_json::Value>(connection)
                    .optional()
                    .map_err(PropertySchemaError::persistence)?
                    .ok_or(PropertySchemaError::WorkspaceNotFound(workspace_id))?;
                decode_definitions(blob).map_err(PropertySchemaError::persistence)
            },
        )
        .await
    }

    async fn save(
        &self,
        workspace_id: WorkspaceId,
        definitions: &[PropertyDefinition],
    ) -> PropertySchemaResult<()> {
        let blob = serde_json::to_value(definitions).map_err(PropertySchemaError::persistence)?;
        run_blocking(
            &self.pool,
            |err| PropertySchemaError::persistence(err),
            move |connection| {
                let affected = diesel::update(
                    workspaces::table.filter(workspaces::id.eq(workspace_id.into_inner())),
                )
                .set((
                    workspaces::task_property_definitions.eq(&blob),
                    workspaces::updated_at.eq(Utc::now()),
                ))
                .execute(connection)
                .map_err(PropertySchemaError::persistence)?;
                if affected == 0 {
                    return Err(PropertySchemaError::WorkspaceNotFound(workspace_id));
                }
                Ok(())
            },
        )
        .await
    }
}

pub(super) fn to_new_row(workspace: &Workspace) -> Result<NewWorkspaceRow, serde_json::Error> {
    Ok(NewWorkspaceRow {
        id: workspace.id().into_inner(),
        name: workspace.name().to_owned(),
        task_property_definitions: serde_json::to_value(workspace.property_definitions())?,
        created_at: workspace.created_at(),
        updated_at: workspace.updated_at(),
    })
}

pub(super) fn row_to_workspace(row: WorkspaceRow) -> Result<Workspace, serde_json::Error> {
    let WorkspaceRow {
        id,
        name,
        task_property_definitions,
        created_at,
        updated_at,
    } = row;
    Ok(Workspace::from_persisted(PersistedWorkspaceData {
        id: WorkspaceId::from_uuid(id),
        name,
        property_definitions: decode_definitions(task_property_definitions)?,
        created_at,
        updated_at,
    }))
}

/// Decodes the schema blob; a SQL `NULL` or JSON `null` reads as empty.
fn decode_definitions(blob: serde_json::Value) -> Result<Vec<PropertyDefinition>, serde_json::Error> {
    if blob.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(blob)
}

#[cfg(test)]
mod tests {
    use super::{row_to_workspace, to_new_row};
    use crate::property::domain::{NewPropertyDefinition, PropertyDefinition, PropertyKind};
    use crate::workspace::adapters::postgres::models::WorkspaceRow;
    use crate::workspace::domain::Workspace;
    use mockable::DefaultClock;
    use serde_json::json;

    #[test]
    fn workspace_survives_row_conversion() {
        let mut workspace = Workspace::new("Northwind Agency", &DefaultClock).expect("valid name");
        let channel = PropertyDefinition::create(
            NewPropertyDefinition::new("Channel", PropertyKind::Select)
                .with_options(vec!["Instagram".to_owned(), "TikTok".to_owned()]),
        )
        .expect("valid definition");
        workspace.replace_property_definitions(vec![channel], &DefaultClock);

        let new_row = to_new_row(&workspace).expect("schema should serialize");
        let row = WorkspaceRow {
            id: new_row.id,
            name: new_row.name,
            task_property_definitions: new_row.task_property_definitions,
            created_at: new_row.created_at,
            updated_at: new_row.updated_at,
        };

        let restored = row_to_workspace(row).expect("row should decode");
        assert_eq!(restored, workspace);
    }

    #[test]
    fn null_schema_blob_reads_as_empty() {
        let workspace = Workspace::new("Empty", &DefaultClock).expect("valid name");
        let row = WorkspaceRow {
            id: workspace.id().into_inner(),
            name: workspace.name().to_owned(),
            task_property_definitions: json!(null),
            created_at: workspace.created_at(),
            updated_at: workspace.updated_at(),
        };

        let restored = row_to_workspace(row).expect("row should decode");
        assert!(restored.property_definitions().is_empty());
    }
}
