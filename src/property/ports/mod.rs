//! Port contracts for the property schema.

pub mod schema;

pub use schema::{PropertySchemaError, PropertySchemaRepository, PropertySchemaResult};
