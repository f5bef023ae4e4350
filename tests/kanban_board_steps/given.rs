//! Given steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use agencydesk::task::services::CreateTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty workspace board")]
fn empty_workspace_board(world: &mut KanbanWorld) {
    world.snapshot = None;
    world.last_drop = None;
}

#[given(r#"a task "{title}" in "{status}""#)]
fn task_in_status(
    world: &mut KanbanWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    run_async(world.store.create(CreateTaskRequest::new(title, status)))
        .wrap_err("create task for kanban scenario")?;
    Ok(())
}
