//! Domain model for workspace tenancy.

mod color;
mod error;
mod ids;
mod session;
mod workspace;

pub use color::HexColor;
pub use error::WorkspaceDomainError;
pub use ids::{UserId, WorkspaceId};
pub use session::WorkspaceSession;
pub use workspace::{PersistedWorkspaceData, Workspace};
