//! In-memory status registry adapters.

mod status;

pub use status::InMemoryStatusRepository;
