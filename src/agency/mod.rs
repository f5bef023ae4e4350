//! Agency records for agencydesk.
//!
//! Clients, projects, brand kits, personas and strategies are flat records
//! keyed to a workspace and optionally to a client. Editors upsert them
//! whole. Onboarding a client writes the client, its strategy and its first
//! project as one compensated sequence.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
