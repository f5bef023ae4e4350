//! Application services for workspace tenancy.

mod directory;

pub use directory::{WorkspaceService, WorkspaceServiceError, WorkspaceServiceResult};
