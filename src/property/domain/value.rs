//! Typed custom property values.

use super::PropertyKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A stored custom property value, one variant per [`PropertyKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Free text.
    Text(String),
    /// Finite number.
    Number(f64),
    /// Selected option label.
    Select(String),
    /// Selected option labels, in selection order.
    MultiSelect(Vec<String>),
    /// Calendar date.
    Date(NaiveDate),
    /// Checkbox state.
    Checkbox(bool),
    /// Absolute http(s) URL.
    Url(String),
    /// Email address.
    Email(String),
}

impl PropertyValue {
    /// Returns the kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Text(_) => PropertyKind::Text,
            Self::Number(_) => PropertyKind::Number,
            Self::Select(_) => PropertyKind::Select,
            Self::MultiSelect(_) => PropertyKind::MultiSelect,
            Self::Date(_) => PropertyKind::Date,
            Self::Checkbox(_) => PropertyKind::Checkbox,
            Self::Url(_) => PropertyKind::Url,
            Self::Email(_) => PropertyKind::Email,
        }
    }

    /// Raw-value ordering used by table sorting.
    ///
    /// Values of the same kind compare by their payload (strings bytewise,
    /// not locale-aware). Values of different kinds, left behind by a kind
    /// change, fall back to the kind's position in [`PropertyKind::ALL`].
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b))
            | (Self::Select(a), Self::Select(b))
            | (Self::Url(a), Self::Url(b))
            | (Self::Email(a), Self::Email(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::MultiSelect(a), Self::MultiSelect(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Checkbox(a), Self::Checkbox(b)) => a.cmp(b),
            _ => kind_rank(self.kind()).cmp(&kind_rank(other.kind())),
        }
    }
}

fn kind_rank(kind: PropertyKind) -> usize {
    PropertyKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or(PropertyKind::ALL.len())
}
