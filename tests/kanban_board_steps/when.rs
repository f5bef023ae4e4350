//! When steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use agencydesk::board::domain::DropTarget;
use agencydesk::status::domain::StatusSlug;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the board is opened")]
fn board_is_opened(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let snapshot =
        run_async(world.board.open_board(&world.store)).wrap_err("open board in scenario")?;
    world.snapshot = Some(snapshot);
    Ok(())
}

#[when(r#""{title}" is dropped on the "{status}" column"#)]
fn dropped_on_column(
    world: &mut KanbanWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let dragged = world.task_titled(&title)?;
    let target = DropTarget::Column(
        StatusSlug::new(status).map_err(|err| eyre::eyre!("invalid column slug: {err}"))?,
    );
    let moved = run_async(world.board.drop_card(&world.store, dragged.id(), &target))
        .wrap_err("drop card on column")?;
    world.last_drop = Some(moved);
    Ok(())
}

#[when(r#""{title}" is dropped on the "{other}" card"#)]
fn dropped_on_card(
    world: &mut KanbanWorld,
    title: String,
    other: String,
) -> Result<(), eyre::Report> {
    let dragged = world.task_titled(&title)?;
    let target = DropTarget::Card(world.task_titled(&other)?.id());
    let moved = run_async(world.board.drop_card(&world.store, dragged.id(), &target))
        .wrap_err("drop card on card")?;
    world.last_drop = Some(moved);
    Ok(())
}

#[when(r#"the status "{slug}" is deleted"#)]
fn status_is_deleted(world: &mut KanbanWorld, slug: String) -> Result<(), eyre::Report> {
    let entries = run_async(world.statuses.list_statuses(&world.session))
        .wrap_err("list statuses in scenario")?;
    let entry = entries
        .iter()
        .find(|entry| entry.slug().as_str() == slug)
        .ok_or_else(|| eyre::eyre!("status {slug:?} is not in the registry"))?;
    run_async(world.statuses.delete_status(&world.session, entry.id()))
        .wrap_err("delete status in scenario")?;
    Ok(())
}
