//! Then steps for kanban board BDD scenarios.

use super::world::KanbanWorld;
use agencydesk::board::domain::{BoardLayout, KanbanBoard};
use rstest_bdd_macros::then;

fn kanban(world: &KanbanWorld) -> Result<&KanbanBoard, eyre::Report> {
    let snapshot = world
        .snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board has not been opened"))?;
    match &snapshot.layout {
        BoardLayout::Kanban(board) => Ok(board),
        other => Err(eyre::eyre!("expected a kanban layout, got {other:?}")),
    }
}

#[then("the board shows {count:usize} columns")]
fn board_shows_columns(world: &KanbanWorld, count: usize) -> Result<(), eyre::Report> {
    let board = kanban(world)?;
    eyre::ensure!(
        board.columns.len() == count,
        "expected {count} columns, found {}",
        board.columns.len()
    );
    Ok(())
}

#[then(r#"column {index:usize} is "{slug}""#)]
fn column_is(world: &KanbanWorld, index: usize, slug: String) -> Result<(), eyre::Report> {
    let board = kanban(world)?;
    let column = index
        .checked_sub(1)
        .and_then(|position| board.columns.get(position))
        .ok_or_else(|| eyre::eyre!("no column at position {index}"))?;
    eyre::ensure!(
        column.status.slug().as_str() == slug,
        "expected column {index} to be {slug}, found {}",
        column.status.slug()
    );
    Ok(())
}

#[then(r#""{title}" is in "{status}" at version {version:u64}"#)]
fn task_is_in_status(
    world: &KanbanWorld,
    title: String,
    status: String,
    version: u64,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected {title} in {status}, found {}",
        task.status()
    );
    eyre::ensure!(
        task.version().value() == version,
        "expected version {version}, found {}",
        task.version().value()
    );
    Ok(())
}

#[then("the drop made no change")]
fn drop_made_no_change(world: &KanbanWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(None) => Ok(()),
        Some(Some(task)) => Err(eyre::eyre!("drop updated task {}", task.id())),
        None => Err(eyre::eyre!("no drop was performed")),
    }
}

#[then(r#""{title}" is unmatched"#)]
fn task_is_unmatched(world: &KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let board = kanban(world)?;
    eyre::ensure!(
        board.unmatched.iter().any(|task| task.title() == title),
        "expected {title} among unmatched tasks"
    );
    Ok(())
}
