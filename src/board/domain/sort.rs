//! Client-side task sorting.

use super::ParseSortFieldError;
use crate::property::domain::{PropertyDefinitionId, PropertyValue};
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

const PROPERTY_PREFIX: &str = "property:";

/// Field a task list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    /// Task title.
    Title,
    /// Status slug.
    Status,
    /// Priority weight.
    Priority,
    /// Due date.
    DueDate,
    /// Creation time.
    CreatedAt,
    /// Last update time.
    UpdatedAt,
    /// A custom property, by definition id.
    Property(PropertyDefinitionId),
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        match normalized {
            "title" => Ok(Self::Title),
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            "due_date" => Ok(Self::DueDate),
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            other => other
                .strip_prefix(PROPERTY_PREFIX)
                .and_then(|raw| Uuid::parse_str(raw).ok())
                .map(|uuid| Self::Property(PropertyDefinitionId::from_uuid(uuid)))
                .ok_or_else(|| ParseSortFieldError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for SortField {
    type Error = ParseSortFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<SortField> for String {
    fn from(value: SortField) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Status => f.write_str("status"),
            Self::Priority => f.write_str("priority"),
            Self::DueDate => f.write_str("due_date"),
            Self::CreatedAt => f.write_str("created_at"),
            Self::UpdatedAt => f.write_str("updated_at"),
            Self::Property(id) => write!(f, "{PROPERTY_PREFIX}{id}"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A sort field with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to compare.
    pub field: SortField,
    /// Direction to apply.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `field`.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Weight(u8),
    Time(DateTime<Utc>),
    Value(&'a PropertyValue),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Weight(a), Self::Weight(b)) => a.cmp(b),
            (Self::Time(a), Self::Time(b)) => a.cmp(b),
            (Self::Value(a), Self::Value(b)) => a.compare(b),
            _ => Ordering::Equal,
        }
    }
}

fn sort_key(task: &Task, field: SortField) -> Option<SortKey<'_>> {
    match field {
        SortField::Title => Some(SortKey::Text(task.title())),
        SortField::Status => Some(SortKey::Text(task.status().as_str())),
        SortField::Priority => task.priority().map(|priority| SortKey::Weight(priority.weight())),
        SortField::DueDate => task.due_date().map(SortKey::Time),
        SortField::CreatedAt => Some(SortKey::Time(task.created_at())),
        SortField::UpdatedAt => Some(SortKey::Time(task.updated_at())),
        SortField::Property(id) => task.properties().get(id).map(SortKey::Value),
    }
}

/// Returns `tasks` sorted by `order`.
///
/// Tasks without a value for the field come last in both directions. Ties
/// keep their input order. Text compares bytewise, not by locale.
#[must_use]
pub fn sort_tasks(tasks: &[Task], order: &SortSpec) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        match (sort_key(a, order.field), sort_key(b, order.field)) {
            (Some(left), Some(right)) => order.direction.apply(left.compare(&right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}
