//! Domain model for automation rules.

mod action;
mod condition;
mod error;
mod ids;
mod rule;
mod trigger;

pub use action::{ActionKind, ActionStep};
pub use condition::{ConditionNode, ConditionOperator};
pub use error::AutomationDomainError;
pub use ids::AutomationRuleId;
pub use rule::{AutomationRule, AutomationRulePatch, NewAutomationRule};
pub use trigger::TriggerEvent;
