//! Port contracts for the status registry.

pub mod repository;

#[cfg(test)]
pub use repository::MockStatusRepository;
pub use repository::{StatusRepository, StatusRepositoryError, StatusRepositoryResult};
