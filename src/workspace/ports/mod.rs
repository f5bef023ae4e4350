//! Port contracts for workspace tenancy.

pub mod repository;

pub use repository::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult};
