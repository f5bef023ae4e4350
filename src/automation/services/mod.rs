//! Orchestration services for automation rules.

mod rules;

pub use rules::{AutomationService, AutomationServiceError, AutomationServiceResult};
