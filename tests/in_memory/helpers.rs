//! Shared wiring for in-memory integration tests.

use std::sync::Arc;
use std::time::Duration;

use agencydesk::board::{
    adapters::memory::InMemoryViewPreferenceRepository, services::BoardService,
};
use agencydesk::notify::InMemoryNotifier;
use agencydesk::status::{
    adapters::memory::InMemoryStatusRepository, domain::StatusSlug,
    services::StatusRegistryService,
};
use agencydesk::task::{
    adapters::{memory::InMemoryTaskRepository, realtime::RealtimeTaskRepository},
    services::{TaskService, TaskStore},
};
use agencydesk::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use mockable::DefaultClock;
use rstest::fixture;

/// Task repository shared by every client in a test.
pub type SharedTasks = RealtimeTaskRepository<InMemoryTaskRepository>;

/// Local task store type used by the tests.
pub type TestStore = TaskStore<SharedTasks, DefaultClock>;

/// Status registry service type used by the tests.
pub type TestStatuses = StatusRegistryService<InMemoryStatusRepository, DefaultClock>;

/// Board service type used by the tests.
pub type TestBoard =
    BoardService<InMemoryStatusRepository, InMemoryViewPreferenceRepository, DefaultClock>;

/// One workspace with its services wired to shared in-memory adapters.
pub struct Harness {
    pub session: WorkspaceSession,
    pub repository: Arc<SharedTasks>,
    pub tasks: TaskService<SharedTasks, DefaultClock>,
    pub statuses: TestStatuses,
    pub board: TestBoard,
    pub notifier: Arc<InMemoryNotifier>,
}

impl Harness {
    /// Opens a store for the harness session.
    #[must_use]
    pub fn store(&self) -> TestStore {
        self.store_for(self.session)
    }

    /// Opens a store for another member or workspace.
    #[must_use]
    pub fn store_for(&self, session: WorkspaceSession) -> TestStore {
        TaskStore::new(self.tasks.clone(), session, self.notifier.clone())
    }
}

/// Provides a fresh harness with one workspace session.
#[fixture]
pub fn harness() -> Harness {
    let clock = Arc::new(DefaultClock);
    let repository = Arc::new(RealtimeTaskRepository::new(InMemoryTaskRepository::new(), 64));
    let statuses = StatusRegistryService::new(
        Arc::new(InMemoryStatusRepository::new()),
        Arc::clone(&clock),
    );
    Harness {
        session: WorkspaceSession::new(WorkspaceId::new(), UserId::new()),
        tasks: TaskService::new(Arc::clone(&repository), Arc::clone(&clock)),
        board: BoardService::new(
            statuses.clone(),
            Arc::new(InMemoryViewPreferenceRepository::new()),
        ),
        statuses,
        repository,
        notifier: Arc::new(InMemoryNotifier::new()),
    }
}

/// Parses a slug that is known to be valid.
#[must_use]
pub fn slug(value: &str) -> StatusSlug {
    StatusSlug::new(value).expect("valid slug")
}

/// Polls `condition` until it holds or the attempts run out.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..500 {
        if condition() {
            return true;
        }
        tokio::task::yield_now().await;
        std::thread::sleep(Duration::from_millis(1));
    }
    condition()
}
