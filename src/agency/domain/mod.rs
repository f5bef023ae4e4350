//! Domain model for agency records.

mod brand_kit;
mod client;
mod error;
mod fields;
mod ids;
mod persona;
mod project;
mod record;
mod strategy;

pub use brand_kit::BrandKit;
pub use client::Client;
pub use error::AgencyDomainError;
pub use ids::{BrandKitId, ClientId, PersonaId, ProjectId, StrategyId};
pub use persona::Persona;
pub use project::Project;
pub use record::AgencyRecord;
pub use strategy::Strategy;
