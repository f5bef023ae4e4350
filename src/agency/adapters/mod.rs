//! Adapter implementations for agency ports.

pub mod memory;
