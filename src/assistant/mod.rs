//! AI collaborator integration for agencydesk.
//!
//! Content drafting, content review and brief-to-plan expansion are delegated
//! to external HTTP endpoints. Results are written back to tasks through the
//! task service. A generated plan is created as a saga so a failure half way
//! leaves no planned tasks behind.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
