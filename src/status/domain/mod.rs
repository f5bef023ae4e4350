//! Domain model for the status registry.

mod defaults;
mod entry;
mod error;
mod ids;
mod palette;

pub use defaults::{DEFAULT_STATUSES, DefaultStatus};
pub use entry::{PersistedStatusData, StatusEntry, StatusPatch};
pub use error::StatusDomainError;
pub use ids::{StatusId, StatusSlug};
pub use palette::StatusPalette;
