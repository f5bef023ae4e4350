//! Port contracts for automation rules.

pub mod repository;

#[cfg(test)]
pub use repository::MockAutomationRuleRepository;
pub use repository::{
    AutomationRuleRepository, AutomationRuleRepositoryError, AutomationRuleRepositoryResult,
};
