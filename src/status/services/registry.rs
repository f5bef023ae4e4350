//! Service layer for listing, seeding, editing and reordering statuses.
//!
//! Provides [`StatusRegistryService`], which seeds the default pipeline on
//! first access and rewrites every position on reorder.

use crate::status::{
    domain::{
        DEFAULT_STATUSES, StatusDomainError, StatusEntry, StatusId, StatusPalette, StatusPatch,
        StatusSlug,
    },
    ports::{StatusRepository, StatusRepositoryError},
};
use crate::workspace::domain::{HexColor, WorkspaceSession};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for appending a status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStatusRequest {
    name: String,
    color: String,
    icon: Option<String>,
}

impl CreateStatusRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: None,
        }
    }

    /// Sets the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Service-level errors for status registry operations.
#[derive(Debug, Error)]
pub enum StatusRegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StatusDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] StatusRepositoryError),
    /// The reorder list is not a permutation of the workspace's entries.
    #[error("reorder list does not match the registry: expected {expected} distinct ids, got {given}")]
    ReorderMismatch {
        /// Number of entries in the registry.
        expected: usize,
        /// Number of ids supplied.
        given: usize,
    },
}

/// Result type for status registry service operations.
pub type StatusRegistryServiceResult<T> = Result<T, StatusRegistryServiceError>;

/// Status registry orchestration service.
pub struct StatusRegistryService<R, C>
where
    R: StatusRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for StatusRegistryService<R, C>
where
    R: StatusRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> StatusRegistryService<R, C>
where
    R: StatusRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new status registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists the workspace's statuses ordered by position.
    ///
    /// An empty registry is seeded with the eight defaults at positions 0–7
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when listing or
    /// seeding fails. A failure part-way through seeding leaves the entries
    /// stored so far.
    pub async fn list_statuses(
        &self,
        session: &WorkspaceSession,
    ) -> StatusRegistryServiceResult<Vec<StatusEntry>> {
        let existing = self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?;
        if !existing.is_empty() {
            return Ok(existing);
        }
        self.seed_defaults(session).await
    }

    /// Lists statuses as a [`StatusPalette`] for slug lookups.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_statuses`].
    pub async fn palette(&self, session: &WorkspaceSession) -> StatusRegistryServiceResult<StatusPalette> {
        Ok(StatusPalette::new(self.list_statuses(session).await?))
    }

    /// Appends a new status after the last column.
    ///
    /// The slug is derived from the name and suffixed (`_2`, `_3`, …) when it
    /// collides with an existing slug.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError`] when the name or colour is
    /// invalid or persistence fails.
    pub async fn create_status(
        &self,
        session: &WorkspaceSession,
        request: CreateStatusRequest,
    ) -> StatusRegistryServiceResult<StatusEntry> {
        let CreateStatusRequest { name, color, icon } = request;
        let color = HexColor::new(color).map_err(StatusDomainError::from)?;
        let existing = self.list_statuses(session).await?;

        let slug = unique_slug(StatusSlug::from_name(&name)?, &existing)?;
        let position = existing
            .iter()
            .map(StatusEntry::position)
            .max()
            .map_or(0, |max| max.saturating_add(1));

        let entry = StatusEntry::new(
            session.workspace_id(),
            &name,
            slug,
            color,
            position,
            icon,
            &*self.clock,
        )?;
        self.repository.store(&entry).await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            slug = %entry.slug(),
            position,
            "status created"
        );
        Ok(entry)
    }

    /// Renames, recolours or re-icons a status. The slug never changes.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError`] when the entry is missing or
    /// outside the session's workspace, the patch is invalid, or persistence
    /// fails.
    pub async fn update_status(
        &self,
        session: &WorkspaceSession,
        id: StatusId,
        patch: StatusPatch,
    ) -> StatusRegistryServiceResult<StatusEntry> {
        let mut entry = self.find_scoped(session, id).await?;
        entry.apply_patch(patch, &*self.clock)?;
        self.repository.update(&entry).await?;
        Ok(entry)
    }

    /// Rewrites every entry's position to its index in `ordered_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::ReorderMismatch`] unless
    /// `ordered_ids` holds each of the workspace's entries exactly once, or
    /// [`StatusRegistryServiceError::Repository`] when a write fails. Writes
    /// are not transactional; a failure part-way leaves earlier positions
    /// updated.
    pub async fn reorder(
        &self,
        session: &WorkspaceSession,
        ordered_ids: &[StatusId],
    ) -> StatusRegistryServiceResult<Vec<StatusEntry>> {
        let mut existing = self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?;

        let distinct: HashSet<StatusId> = ordered_ids.iter().copied().collect();
        let is_permutation = distinct.len() == ordered_ids.len()
            && ordered_ids.len() == existing.len()
            && existing.iter().all(|entry| distinct.contains(&entry.id()));
        if !is_permutation {
            return Err(StatusRegistryServiceError::ReorderMismatch {
                expected: existing.len(),
                given: ordered_ids.len(),
            });
        }

        let mut reordered = Vec::with_capacity(ordered_ids.len());
        for (index, id) in ordered_ids.iter().enumerate() {
            let Some(slot) = existing.iter().position(|entry| entry.id() == *id) else {
                continue;
            };
            let mut entry = existing.swap_remove(slot);
            let position = u32::try_from(index).map_err(StatusRepositoryError::persistence)?;
            entry.set_position(position, &*self.clock);
            self.repository.update(&entry).await?;
            reordered.push(entry);
        }

        tracing::debug!(
            workspace_id = %session.workspace_id(),
            count = reordered.len(),
            "statuses reordered"
        );
        Ok(reordered)
    }

    /// Moves one status to `to_index` and reorders the rest around it.
    ///
    /// An index past the end moves the status to the last column.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reorder`], plus
    /// [`StatusRepositoryError::NotFound`] when `id` is not in the registry.
    pub async fn move_status(
        &self,
        session: &WorkspaceSession,
        id: StatusId,
        to_index: usize,
    ) -> StatusRegistryServiceResult<Vec<StatusEntry>> {
        let current = self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?;
        let mut order: Vec<StatusId> = current.iter().map(StatusEntry::id).collect();
        let from = order
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or(StatusRepositoryError::NotFound(id))?;
        let moved = order.remove(from);
        order.insert(to_index.min(order.len()), moved);
        self.reorder(session, &order).await
    }

    /// Deletes a status without touching tasks that reference its slug.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryServiceError::Repository`] when the entry is
    /// missing, outside the session's workspace, or deletion fails.
    pub async fn delete_status(
        &self,
        session: &WorkspaceSession,
        id: StatusId,
    ) -> StatusRegistryServiceResult<StatusEntry> {
        let entry = self.find_scoped(session, id).await?;
        self.repository.delete(id).await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            slug = %entry.slug(),
            "status deleted; referencing tasks keep the slug"
        );
        Ok(entry)
    }

    async fn seed_defaults(
        &self,
        session: &WorkspaceSession,
    ) -> StatusRegistryServiceResult<Vec<StatusEntry>> {
        let mut seeded = Vec::with_capacity(DEFAULT_STATUSES.len());
        for (position, default) in (0_u32..).zip(DEFAULT_STATUSES.iter()) {
            let entry =
                StatusEntry::from_default(session.workspace_id(), default, position, &*self.clock)?;
            self.repository.store(&entry).await?;
            seeded.push(entry);
        }
        tracing::info!(
            workspace_id = %session.workspace_id(),
            count = seeded.len(),
            "seeded default statuses"
        );
        Ok(seeded)
    }

    async fn find_scoped(
        &self,
        session: &WorkspaceSession,
        id: StatusId,
    ) -> StatusRegistryServiceResult<StatusEntry> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|entry| session.owns(entry.workspace_id()))
            .ok_or_else(|| StatusRepositoryError::NotFound(id).into())
    }
}

fn unique_slug(base: StatusSlug, existing: &[StatusEntry]) -> Result<StatusSlug, StatusDomainError> {
    let taken = |slug: &StatusSlug| existing.iter().any(|entry| entry.slug() == slug);
    if !taken(&base) {
        return Ok(base);
    }
    let mut suffix = 2_u32;
    loop {
        let candidate = StatusSlug::new(format!("{base}_{suffix}"))?;
        if !taken(&candidate) {
            return Ok(candidate);
        }
        suffix = suffix.saturating_add(1);
    }
}
