//! Per-workspace status registry: the ordered pipeline stages used as kanban
//! columns and task status values.
//!
//! Tasks reference a status by its stable slug. Nothing enforces that a
//! task's slug names an existing entry; deleting an entry leaves tasks with a
//! dangling slug that no column matches.
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
