//! Repository port for status registry persistence.

use crate::status::domain::{StatusEntry, StatusId};
use crate::workspace::domain::WorkspaceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status repository operations.
pub type StatusRepositoryResult<T> = Result<T, StatusRepositoryError>;

/// Status registry persistence contract.
///
/// Every method is a single-row operation; reordering is expressed as one
/// `update` per entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Stores a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::DuplicateStatus`] when the identifier
    /// already exists.
    async fn store(&self, entry: &StatusEntry) -> StatusRepositoryResult<()>;

    /// Persists changes to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::NotFound`] when the entry does not
    /// exist.
    async fn update(&self, entry: &StatusEntry) -> StatusRepositoryResult<()>;

    /// Removes an entry. Tasks using its slug are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRepositoryError::NotFound`] when the entry does not
    /// exist.
    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()>;

    /// Finds an entry by identifier.
    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<StatusEntry>>;

    /// Returns a workspace's entries ordered by position.
    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> StatusRepositoryResult<Vec<StatusEntry>>;
}

/// Errors returned by status repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate status identifier: {0}")]
    DuplicateStatus(StatusId),

    /// The entry was not found.
    #[error("status not found: {0}")]
    NotFound(StatusId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
