//! When steps for client provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use agencydesk::agency::services::ClientProvisioning;
use rstest_bdd_macros::when;

#[when(
    r#"the client "{client}" is provisioned with strategy "{strategy}" and project "{project}""#
)]
fn client_is_provisioned(
    world: &mut ProvisioningWorld,
    client: String,
    strategy: String,
    project: String,
) {
    let request = ClientProvisioning::new(client)
        .with_strategy(strategy, Vec::new())
        .with_project(project, None);
    let outcome = run_async(world.service.provision(&world.session, request));
    world.outcome = Some(outcome);
}
