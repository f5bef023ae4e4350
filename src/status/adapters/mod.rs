//! Adapter implementations for status registry ports.

pub mod memory;
pub mod postgres;
