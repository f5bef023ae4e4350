//! Content board views for agencydesk.
//!
//! The board renders one workspace's task list through a per-user view:
//! kanban columns from the status registry, flat rows, a due-date schedule,
//! or status counts. Sorting and filtering are pure functions over the
//! fetched list; rendering never fetches and never re-sorts. Dropping a card
//! resolves to at most one status update.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
