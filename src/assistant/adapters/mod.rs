//! Adapter implementations for the AI collaborator port.

pub mod canned;
pub mod http;
