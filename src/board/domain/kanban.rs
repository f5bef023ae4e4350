//! Kanban columns and drop resolution.

use crate::status::domain::{StatusEntry, StatusPalette, StatusSlug};
use crate::task::domain::{Task, TaskId};

/// One status column and the tasks in it.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn {
    /// Status the column renders.
    pub status: StatusEntry,
    /// Tasks with the column's slug, in source order.
    pub tasks: Vec<Task>,
}

/// Tasks grouped into status columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanbanBoard {
    /// Columns in status position order.
    pub columns: Vec<KanbanColumn>,
    /// Tasks whose slug matches no status.
    pub unmatched: Vec<Task>,
}

impl KanbanBoard {
    /// Groups `tasks` into one column per palette entry.
    ///
    /// Each task lands in exactly one column or in `unmatched`.
    #[must_use]
    pub fn build(palette: &StatusPalette, tasks: &[Task]) -> Self {
        let mut columns: Vec<KanbanColumn> = palette
            .entries()
            .iter()
            .map(|status| KanbanColumn {
                status: status.clone(),
                tasks: Vec::new(),
            })
            .collect();
        let mut unmatched = Vec::new();

        for task in tasks {
            match columns
                .iter_mut()
                .find(|column| column.status.slug() == task.status())
            {
                Some(column) => column.tasks.push(task.clone()),
                None => unmatched.push(task.clone()),
            }
        }

        Self { columns, unmatched }
    }

    /// Returns the column for `slug`, if any.
    #[must_use]
    pub fn column(&self, slug: &StatusSlug) -> Option<&KanbanColumn> {
        self.columns
            .iter()
            .find(|column| column.status.slug() == slug)
    }
}

/// Where a dragged card was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Empty space in a column.
    Column(StatusSlug),
    /// On top of another card.
    Card(TaskId),
}

/// Resolves a drop to the dragged task's new status.
///
/// Returns `None` when the dragged or target card is unknown, or when the
/// status would not change.
#[must_use]
pub fn resolve_drop(dragged: TaskId, target: &DropTarget, tasks: &[Task]) -> Option<StatusSlug> {
    let current = tasks.iter().find(|task| task.id() == dragged)?;
    let destination = match target {
        DropTarget::Column(slug) => slug.clone(),
        DropTarget::Card(card) => tasks
            .iter()
            .find(|task| task.id() == *card)?
            .status()
            .clone(),
    };
    (destination != *current.status()).then_some(destination)
}
