//! In-memory workspace repository, also serving the property schema port.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::property::{
    domain::PropertyDefinition,
    ports::{PropertySchemaError, PropertySchemaRepository, PropertySchemaResult},
};
use crate::workspace::{
    domain::{Workspace, WorkspaceId},
    ports::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult},
};

/// Thread-safe in-memory workspace repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspaceRepository {
    workspaces: Arc<RwLock<HashMap<WorkspaceId, Workspace>>>,
}

impl InMemoryWorkspaceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn store(&self, workspace: &Workspace) -> WorkspaceRepositoryResult<()> {
        let mut workspaces = self
            .workspaces
            .write()
            .map_err(|err| WorkspaceRepositoryError::persistence(lock_error(err)))?;
        if workspaces.contains_key(&workspace.id()) {
            return Err(WorkspaceRepositoryError::DuplicateWorkspace(workspace.id()));
        }
        workspaces.insert(workspace.id(), workspace.clone());
        Ok(())
    }

    async fn update(&self, workspace: &Workspace) -> WorkspaceRepositoryResult<()> {
        let mut workspaces = self
            .workspaces
            .write()
            .map_err(|err| WorkspaceRepositoryError::persistence(lock_error(err)))?;
        let slot = workspaces
            .get_mut(&workspace.id())
            .ok_or(WorkspaceRepositoryError::NotFound(workspace.id()))?;
        *slot = workspace.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: WorkspaceId) -> WorkspaceRepositoryResult<Option<Workspace>> {
        let workspaces = self
            .workspaces
            .read()
            .map_err(|err| WorkspaceRepositoryError::persistence(lock_error(err)))?;
        Ok(workspaces.get(&id).cloned())
    }
}

#[async_trait]
impl PropertySchemaRepository for InMemoryWorkspaceRepository {
    async fn load(&self, workspace_id: WorkspaceId) -> PropertySchemaResult<Vec<PropertyDefinition>> {
        let workspaces = self
            .workspaces
            .read()
            .map_err(|err| PropertySchemaError::persistence(lock_error(err)))?;
        workspaces
            .get(&workspace_id)
            .map(|workspace| workspace.property_definitions().to_vec())
            .ok_or(PropertySchemaError::WorkspaceNotFound(workspace_id))
    }

    async fn save(
        &self,
        workspace_id: WorkspaceId,
        definitions: &[PropertyDefinition],
    ) -> PropertySchemaResult<()> {
        let mut workspaces = self
            .workspaces
            .write()
            .map_err(|err| PropertySchemaError::persistence(lock_error(err)))?;
        let workspace = workspaces
            .get_mut(&workspace_id)
            .ok_or(PropertySchemaError::WorkspaceNotFound(workspace_id))?;
        workspace.replace_property_definitions(definitions.to_vec(), &DefaultClock);
        Ok(())
    }
}
