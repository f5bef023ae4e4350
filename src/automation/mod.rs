//! Automation rules for agencydesk.
//!
//! A rule pairs a trigger event with a condition tree and an ordered chain
//! of actions. Rules are authored, stored and toggled here; nothing in this
//! crate evaluates or executes them.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
