//! `PostgreSQL` adapters for status registry persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresStatusRepository;
