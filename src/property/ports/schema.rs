//! Repository port for a workspace's task property schema.

use crate::property::domain::PropertyDefinition;
use crate::workspace::domain::WorkspaceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for property schema operations.
pub type PropertySchemaResult<T> = Result<T, PropertySchemaError>;

/// Whole-array access to a workspace's property definitions.
///
/// `save` overwrites the stored array. Two editors that load, modify and save
/// concurrently lose one another's changes; the last save wins.
#[async_trait]
pub trait PropertySchemaRepository: Send + Sync {
    /// Loads the ordered definitions for a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`PropertySchemaError::WorkspaceNotFound`] when the workspace
    /// does not exist.
    async fn load(&self, workspace_id: WorkspaceId) -> PropertySchemaResult<Vec<PropertyDefinition>>;

    /// Replaces the definitions for a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`PropertySchemaError::WorkspaceNotFound`] when the workspace
    /// does not exist.
    async fn save(
        &self,
        workspace_id: WorkspaceId,
        definitions: &[PropertyDefinition],
    ) -> PropertySchemaResult<()>;
}

/// Errors returned by property schema repositories.
#[derive(Debug, Clone, Error)]
pub enum PropertySchemaError {
    /// The workspace holding the schema was not found.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PropertySchemaError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
