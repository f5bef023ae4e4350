//! In-memory automation adapters.

mod rules;

pub use rules::InMemoryAutomationRuleRepository;
