//! Adapter implementations for automation ports.

pub mod memory;
