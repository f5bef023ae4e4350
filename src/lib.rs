//! Agencydesk: the task board behind a multi-tenant marketing agency
//! workspace.
//!
//! Each workspace owns a board of content tasks. Tasks move through a
//! configurable status registry, carry typed custom properties, and are
//! rendered through several views (kanban, table, calendar and others). The
//! crate also keeps the agency's client records, authoring-only automation
//! rules, and the calls that hand content to an external AI collaborator.
//!
//! # Architecture
//!
//! Every bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`,
//!   HTTP)
//! - **Services**: Orchestration scoped to a [`workspace::domain::WorkspaceSession`]
//!
//! # Modules
//!
//! - [`workspace`]: Workspaces and sessions
//! - [`status`]: Per-workspace status registry with default seeding
//! - [`property`]: Typed custom property schema and values
//! - [`task`]: Task lifecycle, realtime change feed and the local task store
//! - [`board`]: Sorting, filtering, view selection and kanban drops
//! - [`agency`]: Clients, projects, brand kits, personas and strategies
//! - [`automation`]: Automation rule authoring
//! - [`assistant`]: AI content drafting, review and planning
//! - [`saga`]: Multi-step writes with compensation
//! - [`notify`]: User-facing notices
//! - [`config`], [`persistence`] and [`telemetry`]: Ambient wiring

pub mod agency;
pub mod assistant;
pub mod automation;
pub mod board;
pub mod config;
pub mod notify;
pub mod persistence;
pub mod property;
pub mod saga;
pub mod status;
pub mod task;
pub mod telemetry;
pub mod workspace;
