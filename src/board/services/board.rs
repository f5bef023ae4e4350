//! Board orchestration: preferences, snapshots and card drops.

use crate::board::{
    domain::{
        BoardLayout, DropTarget, SortSpec, TaskFilter, ViewKind, ViewPreference, render_view,
        resolve_drop, sort_tasks,
    },
    ports::{ViewPreferenceRepository, ViewPreferenceRepositoryError},
};
use crate::status::{
    domain::StatusPalette,
    ports::StatusRepository,
    services::{StatusRegistryService, StatusRegistryServiceError},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskServiceError, TaskStore},
};
use crate::workspace::domain::WorkspaceSession;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Status registry failure.
    #[error(transparent)]
    Status(#[from] StatusRegistryServiceError),
    /// Task store failure.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    /// Preference persistence failure.
    #[error(transparent)]
    Preferences(#[from] ViewPreferenceRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Everything a renderer needs for one board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// Preference the snapshot was built with.
    pub preference: ViewPreference,
    /// Workspace statuses in column order.
    pub palette: StatusPalette,
    /// Filtered and sorted tasks.
    pub tasks: Vec<Task>,
    /// Layout for the preferred view.
    pub layout: BoardLayout,
}

/// Board orchestration service.
pub struct BoardService<S, P, C>
where
    S: StatusRepository,
    P: ViewPreferenceRepository,
    C: Clock + Send + Sync,
{
    statuses: StatusRegistryService<S, C>,
    preferences: Arc<P>,
}

impl<S, P, C> Clone for BoardService<S, P, C>
where
    S: StatusRepository,
    P: ViewPreferenceRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            statuses: self.statuses.clone(),
            preferences: Arc::clone(&self.preferences),
        }
    }
}

impl<S, P, C> BoardService<S, P, C>
where
    S: StatusRepository,
    P: ViewPreferenceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board service.
    #[must_use]
    pub const fn new(statuses: StatusRegistryService<S, C>, preferences: Arc<P>) -> Self {
        Self {
            statuses,
            preferences,
        }
    }

    /// Returns the member's saved preference, or the kanban default.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Preferences`] when loading fails.
    pub async fn view_preference(
        &self,
        session: &WorkspaceSession,
    ) -> BoardServiceResult<ViewPreference> {
        let saved = self
            .preferences
            .load(session.workspace_id(), session.user_id())
            .await?;
        Ok(saved.unwrap_or_else(|| ViewPreference::default_for(session)))
    }

    /// Switches the member's view kind.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Preferences`] when loading or saving fails.
    pub async fn set_view(
        &self,
        session: &WorkspaceSession,
        kind: ViewKind,
    ) -> BoardServiceResult<ViewPreference> {
        self.edit_preference(session, |preference| preference.kind = kind)
            .await
    }

    /// Sets or clears the member's sort.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Preferences`] when loading or saving fails.
    pub async fn set_sort(
        &self,
        session: &WorkspaceSession,
        sort: Option<SortSpec>,
    ) -> BoardServiceResult<ViewPreference> {
        self.edit_preference(session, |preference| preference.sort = sort)
            .await
    }

    /// Sets or clears the member's filter. An empty filter is stored as none.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Preferences`] when loading or saving fails.
    pub async fn set_filter(
        &self,
        session: &WorkspaceSession,
        filter: Option<TaskFilter>,
    ) -> BoardServiceResult<ViewPreference> {
        let effective = filter.filter(|candidate| !candidate.is_empty());
        self.edit_preference(session, |preference| preference.filter = effective)
            .await
    }

    /// Loads statuses and tasks and renders the member's preferred view.
    ///
    /// Statuses are seeded on first access. Filtering runs before sorting.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when any of the loads fails.
    pub async fn open_board<R, TC>(&self, store: &TaskStore<R, TC>) -> BoardServiceResult<BoardSnapshot>
    where
        R: TaskRepository,
        TC: Clock + Send + Sync,
    {
        let session = *store.session();
        let palette = self.statuses.palette(&session).await?;
        store.load().await?;
        let preference = self.view_preference(&session).await?;

        let mut tasks = store.tasks();
        if let Some(filter) = &preference.filter {
            tasks = filter.apply(&tasks);
        }
        if let Some(order) = &preference.sort {
            tasks = sort_tasks(&tasks, order);
        }
        let layout = render_view(preference.kind, &tasks, &palette);

        tracing::debug!(
            workspace_id = %session.workspace_id(),
            view = %preference.kind,
            count = tasks.len(),
            "board opened"
        );
        Ok(BoardSnapshot {
            preference,
            palette,
            tasks,
            layout,
        })
    }

    /// Applies a kanban drop.
    ///
    /// Issues exactly one status update when the drop changes the dragged
    /// task's status and none otherwise. Returns the updated task, or `None`
    /// for a no-op drop.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Task`] when the update fails; the store
    /// has already notified the user.
    pub async fn drop_card<R, TC>(
        &self,
        store: &TaskStore<R, TC>,
        dragged: TaskId,
        target: &DropTarget,
    ) -> BoardServiceResult<Option<Task>>
    where
        R: TaskRepository,
        TC: Clock + Send + Sync,
    {
        let Some(status) = resolve_drop(dragged, target, &store.tasks()) else {
            return Ok(None);
        };
        let updated = store.update_status(dragged, status).await?;
        Ok(Some(updated))
    }

    async fn edit_preference<F>(
        &self,
        session: &WorkspaceSession,
        edit: F,
    ) -> BoardServiceResult<ViewPreference>
    where
        F: FnOnce(&mut ViewPreference) + Send,
    {
        let mut preference = self.view_preference(session).await?;
        edit(&mut preference);
        self.preferences.save(&preference).await?;
        Ok(preference)
    }
}
