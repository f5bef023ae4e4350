//! Then steps for client provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use agencydesk::agency::{
    domain::{AgencyDomainError, AgencyRecord},
    ports::RecordRepository,
    services::{ProvisionedClient, ProvisioningError},
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn outcome(
    world: &ProvisioningWorld,
) -> Result<&Result<ProvisionedClient, ProvisioningError>, eyre::Report> {
    world
        .outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("provisioning has not run"))
}

#[then(
    "the workspace holds {clients:usize} clients, {strategies:usize} strategies and {projects:usize} projects"
)]
fn workspace_holds(
    world: &ProvisioningWorld,
    clients: usize,
    strategies: usize,
    projects: usize,
) -> Result<(), eyre::Report> {
    let workspace_id = world.session.workspace_id();
    let counts = (
        run_async(world.clients.list_for_workspace(workspace_id))
            .wrap_err("list clients")?
            .len(),
        run_async(world.strategies.list_for_workspace(workspace_id))
            .wrap_err("list strategies")?
            .len(),
        run_async(world.projects.list_for_workspace(workspace_id))
            .wrap_err("list projects")?
            .len(),
    );
    eyre::ensure!(
        counts == (clients, strategies, projects),
        "expected {clients}/{strategies}/{projects} records, found {counts:?}"
    );
    Ok(())
}

#[then("the project belongs to the client")]
fn project_belongs_to_client(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let provisioned = match outcome(world)? {
        Ok(provisioned) => provisioned,
        Err(err) => return Err(eyre::eyre!("provisioning failed: {err}")),
    };
    let project = provisioned
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project was provisioned"))?;
    eyre::ensure!(
        project.client_id() == Some(provisioned.client.id()),
        "project is not linked to the client"
    );
    Ok(())
}

#[then(r#"provisioning fails at the "{step}" step"#)]
fn provisioning_fails_at(world: &ProvisioningWorld, step: String) -> Result<(), eyre::Report> {
    match outcome(world)? {
        Err(ProvisioningError::Failed(failure)) => {
            eyre::ensure!(failure.step == step, "failed at {}, not {step}", failure.step);
            eyre::ensure!(
                failure.fully_compensated(),
                "compensation left writes behind"
            );
            Ok(())
        }
        other => Err(eyre::eyre!("expected a failed step, got {other:?}")),
    }
}

#[then("provisioning is rejected before any write")]
fn provisioning_is_rejected(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    match outcome(world)? {
        Err(ProvisioningError::Invalid(AgencyDomainError::EmptyName(_))) => Ok(()),
        other => Err(eyre::eyre!("expected a validation error, got {other:?}")),
    }
}
