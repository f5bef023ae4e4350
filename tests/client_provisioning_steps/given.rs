//! Given steps for client provisioning BDD scenarios.

use super::world::ProvisioningWorld;
use rstest_bdd_macros::given;

#[given("a workspace with agency records")]
fn workspace_with_agency_records(world: &mut ProvisioningWorld) {
    world.outcome = None;
}

#[given("project storage is unavailable")]
fn project_storage_is_unavailable(world: &mut ProvisioningWorld) {
    world.projects.go_offline();
}
