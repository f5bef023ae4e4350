//! Port contracts for agency records.

pub mod repository;

pub use repository::{RecordRepository, RecordRepositoryError, RecordRepositoryResult};
