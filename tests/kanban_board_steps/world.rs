//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use agencydesk::board::{
    adapters::memory::InMemoryViewPreferenceRepository,
    services::{BoardService, BoardSnapshot},
};
use agencydesk::notify::InMemoryNotifier;
use agencydesk::status::{
    adapters::memory::InMemoryStatusRepository, services::StatusRegistryService,
};
use agencydesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskStore},
};
use agencydesk::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use mockable::DefaultClock;
use rstest::fixture;

/// Status registry type used by the BDD world.
pub type TestStatuses = StatusRegistryService<InMemoryStatusRepository, DefaultClock>;

/// Board service type used by the BDD world.
pub type TestBoard =
    BoardService<InMemoryStatusRepository, InMemoryViewPreferenceRepository, DefaultClock>;

/// Task store type used by the BDD world.
pub type TestStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for kanban board behaviour tests.
pub struct KanbanWorld {
    pub session: WorkspaceSession,
    pub statuses: TestStatuses,
    pub board: TestBoard,
    pub store: TestStore,
    pub snapshot: Option<BoardSnapshot>,
    pub last_drop: Option<Option<Task>>,
}

impl KanbanWorld {
    /// Creates a world for a fresh workspace.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let session = WorkspaceSession::new(WorkspaceId::new(), UserId::new());
        let statuses = StatusRegistryService::new(
            Arc::new(InMemoryStatusRepository::new()),
            Arc::clone(&clock),
        );
        let board = BoardService::new(
            statuses.clone(),
            Arc::new(InMemoryViewPreferenceRepository::new()),
        );
        let store = TaskStore::new(
            TaskService::new(Arc::new(InMemoryTaskRepository::new()), clock),
            session,
            Arc::new(InMemoryNotifier::new()),
        );

        Self {
            session,
            statuses,
            board,
            store,
            snapshot: None,
            last_drop: None,
        }
    }

    /// Returns the local copy of the task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no loaded task has that title.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.store
            .tasks()
            .into_iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
