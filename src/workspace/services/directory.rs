//! Workspace creation and lookup.

use crate::workspace::{
    domain::{Workspace, WorkspaceDomainError, WorkspaceId, WorkspaceSession},
    ports::{WorkspaceRepository, WorkspaceRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkspaceDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkspaceRepositoryError),
}

/// Result type for workspace service operations.
pub type WorkspaceServiceResult<T> = Result<T, WorkspaceServiceError>;

/// Workspace orchestration service.
pub struct WorkspaceService<R, C>
where
    R: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for WorkspaceService<R, C>
where
    R: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> WorkspaceService<R, C>
where
    R: WorkspaceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new workspace service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError`] when the name is blank or the
    /// repository rejects persistence.
    pub async fn create_workspace(&self, name: impl Into<String>) -> WorkspaceServiceResult<Workspace> {
        let workspace = Workspace::new(name, &*self.clock)?;
        self.repository.store(&workspace).await?;
        tracing::info!(workspace_id = %workspace.id(), "workspace created");
        Ok(workspace)
    }

    /// Finds a workspace by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Repository`] when lookup fails.
    pub async fn find(&self, id: WorkspaceId) -> WorkspaceServiceResult<Option<Workspace>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Renames the session's workspace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError`] when the name is blank, the workspace
    /// does not exist, or persistence fails.
    pub async fn rename(
        &self,
        session: &WorkspaceSession,
        name: impl Into<String>,
    ) -> WorkspaceServiceResult<Workspace> {
        let id = session.workspace_id();
        let mut workspace = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(WorkspaceRepositoryError::NotFound(id))?;
        workspace.rename(name, &*self.clock)?;
        self.repository.update(&workspace).await?;
        Ok(workspace)
    }
}
