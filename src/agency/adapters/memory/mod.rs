//! In-memory agency adapters.

mod records;

pub use records::InMemoryRecordRepository;
