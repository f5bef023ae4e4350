//! `PostgreSQL` repository implementation for the status registry.

use super::{models::StatusRow, schema::task_statuses};
use crate::persistence::{PgPool, run_blocking};
use crate::status::{
    domain::{PersistedStatusData, StatusEntry, StatusId, StatusSlug},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult},
};
use crate::workspace::domain::{HexColor, WorkspaceId};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed status repository.
#[derive(Debug, Clone)]
pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn store(&self, entry: &StatusEntry) -> StatusRepositoryResult<()> {
        let status_id = entry.id();
        let row = to_row(entry)?;
        run_blocking(
            &self.pool,
            |err| StatusRepositoryError::persistence(err),
            move |connection| {
                diesel::insert_into(task_statuses::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            StatusRepositoryError::DuplicateStatus(status_id)
                        }
                        _ => StatusRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
        )
        .await
    }

    async fn update(&self, entry: &StatusEntry) -> StatusRepositoryResult<()> {
        let status_id = entry.id();
        let row = to_row(entry)?;
        run_blocking(
            &self.pool,
            |err| StatusRepositoryError::persistence(err),
            move |connection| {
                let affected = diesel::update(task_statuses::table.find(row.id))
                    .set(&row)
                    .execute(connection)
                    .map_err(StatusRepositoryError::persistence)?;
                if affected == 0 {
                    return Err(StatusRepositoryError::NotFound(status_id));
                }
                Ok(())
            },
        )
        .await
    }

    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()> {
        run_blocking(
            &self.pool,
            |err| StatusRepositoryError::persistence(err),
            move |connection| {
                let affected = diesel::delete(task_statuses::table.find(id.into_inner()))
                    .execute(connection)
                    .map_err(StatusRepositoryError::persistence)?;
                if affected == 0 {
                    return Err(StatusRepositoryError::NotFound(id));
                }
                Ok(())
            },
        )
        .await
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<StatusEntry>> {
        run_blocking(
            &self.pool,
            |err| StatusRepositoryError::persistence(err),
            move |connection| {
                let row = task_statuses::table
                    .find(id.into_inner())
                    .select(StatusRow::as_select())
                    .first::<StatusRow>(connection)
                    .optional()
                    .map_err(StatusRepositoryError::persistence)?;
                row.map(row_to_entry).transpose()
            },
        )
        .await
    }

    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> StatusRepositoryResult<Vec<StatusEntry>> {
        run_blocking(
            &self.pool,
            |err| StatusRepositoryError::persistence(err),
            move |connection| {
                let rows = task_statuses::table
                    .filter(task_statuses::workspace_id.eq(workspace_id.into_inner()))
                    .order((task_statuses::position.asc(), task_statuses::created_at.asc()))
                    .select(StatusRow::as_select())
                    .load::<StatusRow>(connection)
                    .map_err(StatusRepositoryError::persistence)?;
                rows.into_iter().map(row_to_entry).collect()
            },
        )
        .await
    }
}

pub(super) fn to_row(entry: &StatusEntry) -> StatusRepositoryResult<StatusRow> {
    let position = i32::try_from(entry.position()).map_err(StatusRepositoryError::persistence)?;
    Ok(StatusRow {
        id: entry.id().into_inner(),
        workspace_id: entry.workspace_id().into_inner(),
        name: entry.name().to_owned(),
        slug: entry.slug().as_str().to_owned(),
        color: entry.color().as_str().to_owned(),
        position,
        icon: entry.icon().map(str::to_owned),
        created_at: entry.created_at(),
        updated_at: entry.updated_at(),
    })
}

pub(super) fn row_to_entry(row: StatusRow) -> StatusRepositoryResult<StatusEntry> {
    let StatusRow {
        id,
        workspace_id,
        name,
        slug,
        color,
        position,
        icon,
        created_at,
        updated_at,
    } = row;

    let data = PersistedStatusData {
        id: StatusId::from_uuid(id),
        workspace_id: WorkspaceId::from_uuid(workspace_id),
        name,
        slug: StatusSlug::from_stored(slug).map_err(StatusRepositoryError::persistence)?,
        color: HexColor::new(color).map_err(StatusRepositoryError::persistence)?,
        position: u32::try_from(position).map_err(StatusRepositoryError::persistence)?,
        icon,
        created_at,
        updated_at,
    };
    Ok(StatusEntry::from_persisted(data))
}

#[cfg(test)]
mod tests {
    use super::{row_to_entry, to_row};
    use crate::status::domain::{DEFAULT_STATUSES, StatusEntry};
    use crate::workspace::domain::WorkspaceId;
    use mockable::DefaultClock;

    #[test]
    fn entry_survives_row_conversion() {
        let default = DEFAULT_STATUSES.get(4).expect("client review default");
        let entry = StatusEntry::from_default(WorkspaceId::new(), default, 4, &DefaultClock)
            .expect("default should build");

        let row = to_row(&entry).expect("entry should convert");
        assert_eq!(row.slug, "client_review");
        assert_eq!(row.position, 4);

        let restored = row_to_entry(row).expect("row should decode");
        assert_eq!(restored, entry);
    }

    #[test]
    fn negative_position_is_rejected() {
        let default = DEFAULT_STATUSES.first().expect("first default");
        let entry = StatusEntry::from_default(WorkspaceId::new(), default, 0, &DefaultClock)
            .expect("default should build");
        let mut row = to_row(&entry).expect("entry should convert");
        row.position = -1;

        assert!(row_to_entry(row).is_err());
    }
}
