//! Repository port for per-user view preferences.

use crate::board::domain::ViewPreference;
use crate::workspace::domain::{UserId, WorkspaceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for view preference repository operations.
pub type ViewPreferenceRepositoryResult<T> = Result<T, ViewPreferenceRepositoryError>;

/// View preference persistence contract, keyed by workspace and user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewPreferenceRepository: Send + Sync {
    /// Loads the member's saved preference, if any.
    async fn load(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserId,
    ) -> ViewPreferenceRepositoryResult<Option<ViewPreference>>;

    /// Inserts or replaces the member's preference.
    async fn save(&self, preference: &ViewPreference) -> ViewPreferenceRepositoryResult<()>;
}

/// Errors returned by view preference repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ViewPreferenceRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ViewPreferenceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
