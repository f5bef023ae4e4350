//! Workspace-level custom task properties.
//!
//! Property definitions are a per-workspace schema stored as one array on the
//! workspace record. Values live on each task, keyed by definition id, as a
//! tagged variant per property kind. A value is checked against its
//! definition when it is written; editing a definition never rewrites the
//! values already stored on tasks.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//!
//! The schema port is implemented by the workspace adapters, because the
//! schema is part of the workspace row.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
