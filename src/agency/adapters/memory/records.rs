//! In-memory record repository, one instance per record kind.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::agency::{
    domain::AgencyRecord,
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult},
};
use crate::workspace::domain::WorkspaceId;

/// Thread-safe in-memory repository for one record kind.
///
/// Listing preserves insertion order reversed, so the newest record comes
/// first and replacing a record keeps its place.
#[derive(Debug)]
pub struct InMemoryRecordRepository<T>
where
    T: AgencyRecord,
{
    state: Arc<RwLock<RecordTable<T>>>,
}

#[derive(Debug)]
struct RecordTable<T>
where
    T: AgencyRecord,
{
    records: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T> Default for RecordTable<T>
where
    T: AgencyRecord,
{
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> InMemoryRecordRepository<T>
where
    T: AgencyRecord,
{
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for InMemoryRecordRepository<T>
where
    T: AgencyRecord,
{
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(RecordTable::default())),
        }
    }
}

impl<T> Clone for InMemoryRecordRepository<T>
where
    T: AgencyRecord,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

fn lock_error(err: impl ToString) -> RecordRepositoryError {
    RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<T> RecordRepository<T> for InMemoryRecordRepository<T>
where
    T: AgencyRecord,
{
    async fn upsert(&self, record: &T) -> RecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.records.insert(record.id(), record.clone()).is_none() {
            state.order.push(record.id());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: T::Id) -> RecordRepositoryResult<Option<T>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.get(&id).cloned())
    }

    async fn list_for_workspace(&self, workspace_id: WorkspaceId) -> RecordRepositoryResult<Vec<T>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .order
            .iter()
            .rev()
            .filter_map(|id| state.records.get(id))
            .filter(|record| record.workspace_id() == workspace_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: T::Id) -> RecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.records.remove(&id).is_none() {
            return Err(RecordRepositoryError::not_found::<T>(id));
        }
        state.order.retain(|existing| *existing != id);
        Ok(())
    }
}
