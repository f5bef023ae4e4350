//! In-memory view preference repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::ViewPreference,
    ports::{
        ViewPreferenceRepository, ViewPreferenceRepositoryError, ViewPreferenceRepositoryResult,
    },
};
use crate::workspace::domain::{UserId, WorkspaceId};

type PreferenceKey = (WorkspaceId, UserId);

/// Thread-safe in-memory view preference repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryViewPreferenceRepository {
    preferences: Arc<RwLock<HashMap<PreferenceKey, ViewPreference>>>,
}

impl InMemoryViewPreferenceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ViewPreferenceRepositoryError {
    ViewPreferenceRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ViewPreferenceRepository for InMemoryViewPreferenceRepository {
    async fn load(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserId,
    ) -> ViewPreferenceRepositoryResult<Option<ViewPreference>> {
        let preferences = self.preferences.read().map_err(lock_error)?;
        Ok(preferences.get(&(workspace_id, user_id)).cloned())
    }

    async fn save(&self, preference: &ViewPreference) -> ViewPreferenceRepositoryResult<()> {
        let mut preferences = self.preferences.write().map_err(lock_error)?;
        preferences.insert(
            (preference.workspace_id, preference.user_id),
            preference.clone(),
        );
        Ok(())
    }
}
