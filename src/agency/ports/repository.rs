//! Generic repository port for agency records.

use crate::agency::domain::AgencyRecord;
use crate::workspace::domain::WorkspaceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record repository operations.
pub type RecordRepositoryResult<T> = Result<T, RecordRepositoryError>;

/// Persistence contract shared by every agency record kind.
///
/// Writes are whole-record upserts; there is no partial update.
#[async_trait]
pub trait RecordRepository<T>: Send + Sync
where
    T: AgencyRecord,
{
    /// Inserts the record or replaces the stored copy.
    async fn upsert(&self, record: &T) -> RecordRepositoryResult<()>;

    /// Finds a record by identifier.
    async fn find_by_id(&self, id: T::Id) -> RecordRepositoryResult<Option<T>>;

    /// Returns a workspace's records, newest first.
    async fn list_for_workspace(&self, workspace_id: WorkspaceId) -> RecordRepositoryResult<Vec<T>>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: T::Id) -> RecordRepositoryResult<()>;
}

/// Errors returned by record repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordRepositoryError {
    /// The record was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind.
        kind: &'static str,
        /// Rendered identifier.
        id: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordRepositoryError {
    /// Builds a not-found error for a record kind.
    pub fn not_found<T: AgencyRecord>(id: T::Id) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
