//! Client-side task filtering.

use crate::status::domain::StatusSlug;
use crate::task::domain::{Task, TaskPriority};
use crate::workspace::domain::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Conjunction of optional task predicates.
///
/// Empty sets and unset fields match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Statuses to keep.
    #[serde(default)]
    pub statuses: BTreeSet<StatusSlug>,
    /// Priorities to keep. Tasks without a priority never match a
    /// non-empty set.
    #[serde(default)]
    pub priorities: Vec<TaskPriority>,
    /// Assignee to keep.
    #[serde(default)]
    pub assignee: Option<UserId>,
    /// Case-insensitive title substring.
    #[serde(default)]
    pub search: Option<String>,
}

impl TaskFilter {
    /// Keeps only tasks in `status`.
    #[must_use]
    pub fn with_status(mut self, status: StatusSlug) -> Self {
        self.statuses.insert(status);
        self
    }

    /// Keeps only tasks with `priority`.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        if !self.priorities.contains(&priority) {
            self.priorities.push(priority);
        }
        self
    }

    /// Keeps only tasks assigned to `assignee`.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Keeps only tasks whose title contains `search`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns `true` when the filter keeps every task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
            && self.priorities.is_empty()
            && self.assignee.is_none()
            && self.search.as_deref().is_none_or(|term| term.trim().is_empty())
    }

    /// Returns `true` when `task` passes every predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = self.statuses.is_empty() || self.statuses.contains(task.status());
        let priority_ok = self.priorities.is_empty()
            || task
                .priority()
                .is_some_and(|priority| self.priorities.contains(priority));
        let assignee_ok = self
            .assignee
            .is_none_or(|assignee| task.assignee() == Some(assignee));
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let needle = term.trim().to_lowercase();
            needle.is_empty() || task.title().to_lowercase().contains(&needle)
        });
        status_ok && priority_ok && assignee_ok && search_ok
    }

    /// Returns the matching tasks in input order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}
