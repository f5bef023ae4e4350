//! In-memory status repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::status::{
    domain::{StatusEntry, StatusId},
    ports::{StatusRepository, StatusRepositoryError, StatusRepositoryResult},
};
use crate::workspace::domain::WorkspaceId;

/// Thread-safe in-memory status repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusRepository {
    entries: Arc<RwLock<HashMap<StatusId, StatusEntry>>>,
}

impl InMemoryStatusRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> StatusRepositoryError {
    StatusRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn store(&self, entry: &StatusEntry) -> StatusRepositoryResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        if entries.contains_key(&entry.id()) {
            return Err(StatusRepositoryError::DuplicateStatus(entry.id()));
        }
        entries.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &StatusEntry) -> StatusRepositoryResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        let slot = entries
            .get_mut(&entry.id())
            .ok_or(StatusRepositoryError::NotFound(entry.id()))?;
        *slot = entry.clone();
        Ok(())
    }

    async fn delete(&self, id: StatusId) -> StatusRepositoryResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries
            .remove(&id)
            .map(|_| ())
            .ok_or(StatusRepositoryError::NotFound(id))
    }

    async fn find_by_id(&self, id: StatusId) -> StatusRepositoryResult<Option<StatusEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&id).cloned())
    }

    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> StatusRepositoryResult<Vec<StatusEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        let mut listed: Vec<StatusEntry> = entries
            .values()
            .filter(|entry| entry.workspace_id() == workspace_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
        Ok(listed)
    }
}
