//! Schema editing and validated value writes.

use crate::property::{
    domain::{
        NewPropertyDefinition, PropertyDefinition, PropertyDefinitionId, PropertyDefinitionPatch,
        PropertyDomainError, PropertyKind, PropertyValue,
    },
    ports::{PropertySchemaError, PropertySchemaRepository},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use crate::workspace::domain::WorkspaceSession;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for property operations.
#[derive(Debug, Error)]
pub enum PropertyServiceError {
    /// Definition or value validation failed.
    #[error(transparent)]
    Domain(#[from] PropertyDomainError),
    /// Loading or saving the schema failed.
    #[error(transparent)]
    Schema(#[from] PropertySchemaError),
    /// Writing the task failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    /// No definition with this id exists in the workspace.
    #[error("property definition not found: {0}")]
    DefinitionNotFound(PropertyDefinitionId),
    /// The option was saved to the schema but assigning it to the task
    /// failed. The option is not removed again.
    #[error("option '{label}' was added to property {definition_id} but the task was not updated: {source}")]
    AssignAfterOptionFailed {
        /// Definition that now holds the option.
        definition_id: PropertyDefinitionId,
        /// Option label that was added.
        label: String,
        /// Task write failure.
        source: TaskServiceError,
    },
}

/// Result type for property service operations.
pub type PropertyServiceResult<T> = Result<T, PropertyServiceError>;

/// Property schema orchestration service.
///
/// The schema is read and written as one array, so concurrent editors
/// overwrite one another; the last save wins.
pub struct PropertySchemaService<S, R, C>
where
    S: PropertySchemaRepository,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    schema: Arc<S>,
    tasks: TaskService<R, C>,
}

impl<S, R, C> Clone for PropertySchemaService<S, R, C>
where
    S: PropertySchemaRepository,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            tasks: self.tasks.clone(),
        }
    }
}

impl<S, R, C> PropertySchemaService<S, R, C>
where
    S: PropertySchemaRepository,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new property schema service.
    #[must_use]
    pub const fn new(schema: Arc<S>, tasks: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            schema,
            tasks: TaskService::new(tasks, clock),
        }
    }

    /// Lists the workspace's definitions in display order.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::Schema`] when the schema cannot be
    /// loaded.
    pub async fn list_definitions(
        &self,
        session: &WorkspaceSession,
    ) -> PropertyServiceResult<Vec<PropertyDefinition>> {
        Ok(self.schema.load(session.workspace_id()).await?)
    }

    /// Appends a definition and saves the whole schema.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the definition is invalid or the
    /// schema cannot be loaded or saved.
    pub async fn add_definition(
        &self,
        session: &WorkspaceSession,
        request: NewPropertyDefinition,
    ) -> PropertyServiceResult<PropertyDefinition> {
        let definition = PropertyDefinition::create(request)?;
        let mut definitions = self.list_definitions(session).await?;
        definitions.push(definition.clone());
        self.schema
            .save(session.workspace_id(), &definitions)
            .await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            definition_id = %definition.id(),
            kind = %definition.kind(),
            "property definition added"
        );
        Ok(definition)
    }

    /// Patches a definition in place. Stored task values are not migrated.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the definition is missing, the
    /// patch is invalid, or the schema cannot be saved.
    pub async fn update_definition(
        &self,
        session: &WorkspaceSession,
        id: PropertyDefinitionId,
        patch: PropertyDefinitionPatch,
    ) -> PropertyServiceResult<PropertyDefinition> {
        let mut definitions = self.list_definitions(session).await?;
        let slot = definitions
            .iter_mut()
            .find(|definition| definition.id() == id)
            .ok_or(PropertyServiceError::DefinitionNotFound(id))?;
        slot.apply_patch(patch)?;
        let updated = slot.clone();
        self.schema
            .save(session.workspace_id(), &definitions)
            .await?;
        Ok(updated)
    }

    /// Removes a definition. Values already stored on tasks stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the definition is missing or the
    /// schema cannot be saved.
    pub async fn remove_definition(
        &self,
        session: &WorkspaceSession,
        id: PropertyDefinitionId,
    ) -> PropertyServiceResult<PropertyDefinition> {
        let mut definitions = self.list_definitions(session).await?;
        let index = definitions
            .iter()
            .position(|definition| definition.id() == id)
            .ok_or(PropertyServiceError::DefinitionNotFound(id))?;
        let removed = definitions.remove(index);
        self.schema
            .save(session.workspace_id(), &definitions)
            .await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            definition_id = %id,
            "property definition removed"
        );
        Ok(removed)
    }

    /// Validates `value` against its definition and writes it to the task.
    ///
    /// `None` clears the value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the definition is missing, the
    /// value does not fit it, or the task write fails.
    pub async fn set_task_value(
        &self,
        session: &WorkspaceSession,
        task_id: TaskId,
        definition_id: PropertyDefinitionId,
        value: Option<PropertyValue>,
    ) -> PropertyServiceResult<Task> {
        let definition = self.find_definition(session, definition_id).await?;
        if let Some(value) = &value {
            definition.validate(value)?;
        }
        Ok(self
            .tasks
            .set_property(session, task_id, &definition, value)
            .await?)
    }

    /// Adds `label` to a select or multi-select definition, then assigns it
    /// to the task.
    ///
    /// These are two separate writes. A select value becomes `label`; a
    /// multi-select value gains `label` if it does not hold it yet.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::AssignAfterOptionFailed`] when the
    /// option was saved but the task write failed. Other variants mean
    /// nothing was written.
    pub async fn create_option_and_assign(
        &self,
        session: &WorkspaceSession,
        task_id: TaskId,
        definition_id: PropertyDefinitionId,
        label: &str,
    ) -> PropertyServiceResult<Task> {
        let task = self.tasks.find_task(session, task_id).await?;
        let mut definitions = self.list_definitions(session).await?;
        let slot = definitions
            .iter_mut()
            .find(|definition| definition.id() == definition_id)
            .ok_or(PropertyServiceError::DefinitionNotFound(definition_id))?;
        let option = label.trim().to_owned();
        let added = slot.add_option(&option)?;
        let definition = slot.clone();

        if added {
            self.schema
                .save(session.workspace_id(), &definitions)
                .await?;
            tracing::debug!(
                workspace_id = %session.workspace_id(),
                %definition_id,
                %option,
                "property option added"
            );
        }

        let value = assigned_value(&definition, &task, &option);
        self.tasks
            .set_property(session, task_id, &definition, Some(value))
            .await
            .map_err(|source| {
                tracing::warn!(
                    workspace_id = %session.workspace_id(),
                    %definition_id,
                    %task_id,
                    error = %source,
                    "option saved but task value not assigned"
                );
                PropertyServiceError::AssignAfterOptionFailed {
                    definition_id,
                    label: option,
                    source,
                }
            })
    }

    async fn find_definition(
        &self,
        session: &WorkspaceSession,
        id: PropertyDefinitionId,
    ) -> PropertyServiceResult<PropertyDefinition> {
        self.list_definitions(session)
            .await?
            .into_iter()
            .find(|definition| definition.id() == id)
            .ok_or(PropertyServiceError::DefinitionNotFound(id))
    }
}

fn assigned_value(definition: &PropertyDefinition, task: &Task, label: &str) -> PropertyValue {
    if definition.kind() != PropertyKind::MultiSelect {
        return PropertyValue::Select(label.to_owned());
    }
    let mut labels = match task.properties().typed_value(definition) {
        Some(PropertyValue::MultiSelect(labels)) => labels.clone(),
        _ => Vec::new(),
    };
    if !labels.iter().any(|existing| existing == label) {
        labels.push(label.to_owned());
    }
    PropertyValue::MultiSelect(labels)
}
