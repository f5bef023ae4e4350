//! Port contracts for board views.

pub mod preferences;

#[cfg(test)]
pub use preferences::MockViewPreferenceRepository;
pub use preferences::{
    ViewPreferenceRepository, ViewPreferenceRepositoryError, ViewPreferenceRepositoryResult,
};
