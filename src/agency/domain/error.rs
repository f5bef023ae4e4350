//! Validation errors for agency records.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or editing an agency record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgencyDomainError {
    /// The record's name or title is blank.
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// A project ends before it starts.
    #[error("project ends on {end} before it starts on {start}")]
    InvalidSchedule {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
