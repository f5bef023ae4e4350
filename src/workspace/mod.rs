//! Workspace tenancy for agencydesk.
//!
//! A workspace is the tenant boundary: every record in the crate is scoped to
//! exactly one. Callers hold a [`domain::WorkspaceSession`] and pass it into
//! every service call instead of relying on an ambient "current workspace".
//! The workspace row also carries the task property schema as a JSON blob,
//! so the workspace adapters implement the property schema port.
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
