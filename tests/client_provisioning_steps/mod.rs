//! Step definitions for client provisioning scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
