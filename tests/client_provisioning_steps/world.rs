//! Shared world state for client provisioning BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use agencydesk::agency::{
    adapters::memory::InMemoryRecordRepository,
    domain::{Client, Project, ProjectId, Strategy},
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult},
    services::{ClientProvisioningService, ProvisionedClient, ProvisioningError},
};
use agencydesk::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;

/// Project repository whose writes can be switched off.
#[derive(Default)]
pub struct SwitchableProjects {
    inner: InMemoryRecordRepository<Project>,
    offline: AtomicBool,
}

impl SwitchableProjects {
    /// Makes every later write fail.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordRepository<Project> for SwitchableProjects {
    async fn upsert(&self, record: &Project) -> RecordRepositoryResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RecordRepositoryError::persistence(std::io::Error::other(
                "project storage is unavailable",
            )));
        }
        self.inner.upsert(record).await
    }

    async fn find_by_id(&self, id: ProjectId) -> RecordRepositoryResult<Option<Project>> {
        self.inner.find_by_id(id).await
    }

    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> RecordRepositoryResult<Vec<Project>> {
        self.inner.list_for_workspace(workspace_id).await
    }

    async fn delete(&self, id: ProjectId) -> RecordRepositoryResult<()> {
        self.inner.delete(id).await
    }
}

/// Provisioning service type used by the BDD world.
pub type TestProvisioning = ClientProvisioningService<
    InMemoryRecordRepository<Client>,
    InMemoryRecordRepository<Strategy>,
    SwitchableProjects,
    DefaultClock,
>;

/// Scenario world for client provisioning behaviour tests.
pub struct ProvisioningWorld {
    pub session: WorkspaceSession,
    pub clients: Arc<InMemoryRecordRepository<Client>>,
    pub strategies: Arc<InMemoryRecordRepository<Strategy>>,
    pub projects: Arc<SwitchableProjects>,
    pub service: TestProvisioning,
    pub outcome: Option<Result<ProvisionedClient, ProvisioningError>>,
}

impl ProvisioningWorld {
    /// Creates a world with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        let clients = Arc::new(InMemoryRecordRepository::new());
        let strategies = Arc::new(InMemoryRecordRepository::new());
        let projects = Arc::new(SwitchableProjects::default());
        let service = ClientProvisioningService::new(
            Arc::clone(&clients),
            Arc::clone(&strategies),
            Arc::clone(&projects),
            Arc::new(DefaultClock),
        );

        Self {
            session: WorkspaceSession::new(WorkspaceId::new(), UserId::new()),
            clients,
            strategies,
            projects,
            service,
            outcome: None,
        }
    }
}

impl Default for ProvisioningWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProvisioningWorld {
    ProvisioningWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
