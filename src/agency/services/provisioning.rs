//! Client onboarding: client, strategy and first project as one saga.

use crate::agency::{
    domain::{AgencyDomainError, AgencyRecord, Client, Project, Strategy},
    ports::{RecordRepository, RecordRepositoryError},
};
use crate::saga::{Saga, SagaError, SagaStep};
use crate::workspace::domain::WorkspaceSession;
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Onboarding request for a new client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientProvisioning {
    client_name: String,
    industry: Option<String>,
    strategy: Option<(String, Vec<String>)>,
    project: Option<(String, Option<String>)>,
}

impl ClientProvisioning {
    /// Creates a request that only provisions the client.
    #[must_use]
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            industry: None,
            strategy: None,
            project: None,
        }
    }

    /// Sets the client's industry.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Adds a strategy document with its objectives.
    #[must_use]
    pub fn with_strategy(
        mut self,
        title: impl Into<String>,
        objectives: impl IntoIterator<Item = String>,
    ) -> Self {
        self.strategy = Some((title.into(), objectives.into_iter().collect()));
        self
    }

    /// Adds a first project with an optional brief.
    #[must_use]
    pub fn with_project(mut self, name: impl Into<String>, brief: Option<String>) -> Self {
        self.project = Some((name.into(), brief));
        self
    }
}

/// Records written by a successful onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedClient {
    /// The new client.
    pub client: Client,
    /// Its strategy, when requested.
    pub strategy: Option<Strategy>,
    /// Its first project, when requested.
    pub project: Option<Project>,
}

/// Errors returned by client onboarding.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// A requested record failed validation; nothing was written.
    #[error(transparent)]
    Invalid(#[from] AgencyDomainError),
    /// A write failed; completed writes were compensated.
    #[error("client provisioning failed: {0}")]
    Failed(#[from] SagaError<RecordRepositoryError>),
}

struct ProvisioningPlan {
    client: Client,
    strategy: Option<Strategy>,
    project: Option<Project>,
}

type Selector<T> = fn(&ProvisioningPlan) -> Option<&T>;

fn planned_client(plan: &ProvisioningPlan) -> Option<&Client> {
    Some(&plan.client)
}

fn planned_strategy(plan: &ProvisioningPlan) -> Option<&Strategy> {
    plan.strategy.as_ref()
}

fn planned_project(plan: &ProvisioningPlan) -> Option<&Project> {
    plan.project.as_ref()
}

struct StoreRecord<T, R>
where
    T: AgencyRecord,
    R: RecordRepository<T>,
{
    repository: Arc<R>,
    select: Selector<T>,
}

#[async_trait]
impl<T, R> SagaStep<ProvisioningPlan, RecordRepositoryError> for StoreRecord<T, R>
where
    T: AgencyRecord,
    R: RecordRepository<T> + 'static,
{
    fn name(&self) -> &str {
        T::KIND
    }

    async fn execute(&self, plan: &mut ProvisioningPlan) -> Result<(), RecordRepositoryError> {
        match (self.select)(plan) {
            Some(record) => self.repository.upsert(record).await,
            None => Ok(()),
        }
    }

    async fn compensate(&self, plan: &mut ProvisioningPlan) -> Result<(), RecordRepositoryError> {
        match (self.select)(plan) {
            Some(record) => self.repository.delete(record.id()).await,
            None => Ok(()),
        }
    }
}

/// Onboards clients across the client, strategy and project repositories.
pub struct ClientProvisioningService<CR, SR, PR, C>
where
    CR: RecordRepository<Client> + 'static,
    SR: RecordRepository<Strategy> + 'static,
    PR: RecordRepository<Project> + 'static,
    C: Clock + Send + Sync,
{
    clients: Arc<CR>,
    strategies: Arc<SR>,
    projects: Arc<PR>,
    clock: Arc<C>,
}

impl<CR, SR, PR, C> ClientProvisioningService<CR, SR, PR, C>
where
    CR: RecordRepository<Client> + 'static,
    SR: RecordRepository<Strategy> + 'static,
    PR: RecordRepository<Project> + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a provisioning service.
    #[must_use]
    pub const fn new(
        clients: Arc<CR>,
        strategies: Arc<SR>,
        projects: Arc<PR>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            clients,
            strategies,
            projects,
            clock,
        }
    }

    /// Writes the client, then its strategy, then its project.
    ///
    /// Every record is validated before the first write. When a write fails
    /// the earlier ones are deleted again, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Invalid`] before any write, or
    /// [`ProvisioningError::Failed`] naming the failed step and any
    /// compensation that could not be applied.
    pub async fn provision(
        &self,
        session: &WorkspaceSession,
        request: ClientProvisioning,
    ) -> Result<ProvisionedClient, ProvisioningError> {
        let mut plan = self.plan(session, request)?;
        let saga = Saga::new("client provisioning")
            .step(StoreRecord {
                repository: Arc::clone(&self.clients),
                select: planned_client,
            })
            .step(StoreRecord {
                repository: Arc::clone(&self.strategies),
                select: planned_strategy,
            })
            .step(StoreRecord {
                repository: Arc::clone(&self.projects),
                select: planned_project,
            });
        saga.run(&mut plan).await?;

        tracing::info!(
            workspace_id = %session.workspace_id(),
            client_id = %plan.client.id(),
            with_strategy = plan.strategy.is_some(),
            with_project = plan.project.is_some(),
            "client provisioned"
        );
        Ok(ProvisionedClient {
            client: plan.client,
            strategy: plan.strategy,
            project: plan.project,
        })
    }

    fn plan(
        &self,
        session: &WorkspaceSession,
        request: ClientProvisioning,
    ) -> Result<ProvisioningPlan, AgencyDomainError> {
        let clock = &*self.clock;
        let workspace_id = session.workspace_id();
        let ClientProvisioning {
            client_name,
            industry,
            strategy,
            project,
        } = request;

        let client = Client::new(workspace_id, &client_name, clock)?
            .with_industry(industry.unwrap_or_default());
        let client_id = client.id();

        let strategy_record = strategy
            .map(|(title, objectives)| {
                Strategy::new(workspace_id, &title, clock)
                    .map(|draft| draft.with_client(client_id).with_objectives(objectives))
            })
            .transpose()?;
        let project_record = project
            .map(|(name, brief)| {
                Project::new(workspace_id, &name, clock)
                    .map(|draft| draft.with_client(client_id).with_brief(brief.unwrap_or_default()))
            })
            .transpose()?;

        Ok(ProvisioningPlan {
            client,
            strategy: strategy_record,
            project: project_record,
        })
    }
}
