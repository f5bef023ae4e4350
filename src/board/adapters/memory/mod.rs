//! In-memory board adapters.

mod preferences;

pub use preferences::InMemoryViewPreferenceRepository;
