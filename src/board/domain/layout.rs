//! View selection: one layout per view kind.

use super::{KanbanBoard, ViewKind};
use crate::status::domain::{StatusPalette, StatusSlug};
use crate::task::domain::Task;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Tasks due on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    /// UTC day.
    pub day: NaiveDate,
    /// Tasks due that day, in source order.
    pub tasks: Vec<Task>,
}

/// Number of tasks in one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    /// Counted slug.
    pub status: StatusSlug,
    /// Display name, `None` for orphaned slugs.
    pub name: Option<String>,
    /// Task count.
    pub count: usize,
}

/// Renderer input produced by [`render_view`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoardLayout {
    /// Status columns.
    Kanban(KanbanBoard),
    /// Flat rows for table, list, feed and gallery views.
    Rows {
        /// Requested view.
        kind: ViewKind,
        /// Tasks in source order.
        tasks: Vec<Task>,
    },
    /// Due-day groups for calendar and timeline views.
    Schedule {
        /// Requested view.
        kind: ViewKind,
        /// Buckets in day order.
        days: Vec<DayBucket>,
        /// Tasks without a due date.
        unscheduled: Vec<Task>,
    },
    /// Counts per status, palette order first then orphaned slugs.
    Chart(Vec<StatusCount>),
}

/// Maps `kind` to its layout over already sorted tasks.
///
/// Never fetches and never reorders tasks within a group.
#[must_use]
pub fn render_view(kind: ViewKind, tasks: &[Task], palette: &StatusPalette) -> BoardLayout {
    match kind {
        ViewKind::Kanban => BoardLayout::Kanban(KanbanBoard::build(palette, tasks)),
        ViewKind::Table | ViewKind::List | ViewKind::Feed | ViewKind::Gallery => {
            BoardLayout::Rows {
                kind,
                tasks: tasks.to_vec(),
            }
        }
        ViewKind::Calendar | ViewKind::Timeline => schedule(kind, tasks),
        ViewKind::Chart => BoardLayout::Chart(status_counts(tasks, palette)),
    }
}

fn schedule(kind: ViewKind, tasks: &[Task]) -> BoardLayout {
    let mut by_day: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    let mut unscheduled = Vec::new();
    for task in tasks {
        match task.due_date() {
            Some(due) => by_day.entry(due.date_naive()).or_default().push(task.clone()),
            None => unscheduled.push(task.clone()),
        }
    }
    BoardLayout::Schedule {
        kind,
        days: by_day
            .into_iter()
            .map(|(day, day_tasks)| DayBucket {
                day,
                tasks: day_tasks,
            })
            .collect(),
        unscheduled,
    }
}

fn status_counts(tasks: &[Task], palette: &StatusPalette) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = palette
        .entries()
        .iter()
        .map(|entry| StatusCount {
            status: entry.slug().clone(),
            name: Some(entry.name().to_owned()),
            count: 0,
        })
        .collect();

    for task in tasks {
        if let Some(existing) = counts.iter_mut().find(|count| &count.status == task.status()) {
            existing.count += 1;
        } else {
            counts.push(StatusCount {
                status: task.status().clone(),
                name: None,
                count: 1,
            });
        }
    }
    counts
}
