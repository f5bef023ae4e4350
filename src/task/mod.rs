//! Task store for agencydesk.
//!
//! Tasks are the cards of the content board. Writes are single-row
//! mutations that bump a per-record version; the local [`services::TaskStore`]
//! reconciles its own writes and realtime change events by comparing
//! versions, so call order never decides which copy wins.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
