//! Application services for the property schema and task values.

mod schema;

pub use schema::{PropertySchemaService, PropertyServiceError, PropertyServiceResult};
