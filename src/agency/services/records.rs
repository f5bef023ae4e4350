//! Session-scoped CRUD over one agency record kind.

use crate::agency::{
    domain::AgencyRecord,
    ports::{RecordRepository, RecordRepositoryError},
};
use crate::workspace::domain::{WorkspaceId, WorkspaceSession};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for record operations.
#[derive(Debug, Error)]
pub enum RecordServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
    /// The record belongs to another workspace.
    #[error("{kind} belongs to workspace {actual}, not {expected}")]
    WorkspaceMismatch {
        /// Record kind.
        kind: &'static str,
        /// Session workspace.
        expected: WorkspaceId,
        /// Record workspace.
        actual: WorkspaceId,
    },
}

/// Result type for record service operations.
pub type RecordServiceResult<T> = Result<T, RecordServiceError>;

/// Upsert, find, list and delete for one record kind.
pub struct RecordService<T, R>
where
    T: AgencyRecord,
    R: RecordRepository<T>,
{
    repository: Arc<R>,
    record: PhantomData<fn() -> T>,
}

impl<T, R> Clone for RecordService<T, R>
where
    T: AgencyRecord,
    R: RecordRepository<T>,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            record: PhantomData,
        }
    }
}

impl<T, R> RecordService<T, R>
where
    T: AgencyRecord,
    R: RecordRepository<T>,
{
    /// Creates a record service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            record: PhantomData,
        }
    }

    /// Inserts or replaces a record in the session workspace.
    ///
    /// # Errors
    ///
    /// Returns [`RecordServiceError::WorkspaceMismatch`] when the record, or
    /// the stored record with the same id, belongs to another workspace.
    /// Otherwise returns the repository error.
    pub async fn upsert(&self, session: &WorkspaceSession, record: &T) -> RecordServiceResult<()> {
        ensure_owned(session, record)?;
        if let Some(existing) = self.repository.find_by_id(record.id()).await? {
            ensure_owned(session, &existing)?;
        }
        self.repository.upsert(record).await?;
        tracing::debug!(
            workspace_id = %session.workspace_id(),
            kind = T::KIND,
            id = %record.id(),
            "record saved"
        );
        Ok(())
    }

    /// Finds a record in the session workspace.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::NotFound`] when the record is missing
    /// or belongs to another workspace.
    pub async fn find(&self, session: &WorkspaceSession, id: T::Id) -> RecordServiceResult<T> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|record| session.owns(record.workspace_id()))
            .ok_or_else(|| RecordRepositoryError::not_found::<T>(id).into())
    }

    /// Lists the session workspace's records, newest first.
    ///
    /// # Errors
    ///
    /// Returns the repository error.
    pub async fn list(&self, session: &WorkspaceSession) -> RecordServiceResult<Vec<T>> {
        Ok(self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?)
    }

    /// Deletes a record from the session workspace.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::NotFound`] when the record is missing
    /// or belongs to another workspace.
    pub async fn delete(&self, session: &WorkspaceSession, id: T::Id) -> RecordServiceResult<T> {
        let record = self.find(session, id).await?;
        self.repository.delete(id).await?;
        tracing::debug!(
            workspace_id = %session.workspace_id(),
            kind = T::KIND,
            id = %id,
            "record deleted"
        );
        Ok(record)
    }
}

fn ensure_owned<T: AgencyRecord>(session: &WorkspaceSession, record: &T) -> RecordServiceResult<()> {
    if session.owns(record.workspace_id()) {
        Ok(())
    } else {
        Err(RecordServiceError::WorkspaceMismatch {
            kind: T::KIND,
            expected: session.workspace_id(),
            actual: record.workspace_id(),
        })
    }
}
