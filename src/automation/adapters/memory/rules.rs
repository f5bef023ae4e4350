//! In-memory automation rule repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::automation::{
    domain::{AutomationRule, AutomationRuleId},
    ports::{
        AutomationRuleRepository, AutomationRuleRepositoryError, AutomationRuleRepositoryResult,
    },
};
use crate::workspace::domain::WorkspaceId;

/// Thread-safe in-memory automation rule repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAutomationRuleRepository {
    rules: Arc<RwLock<HashMap<AutomationRuleId, AutomationRule>>>,
}

impl InMemoryAutomationRuleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> AutomationRuleRepositoryError {
    AutomationRuleRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AutomationRuleRepository for InMemoryAutomationRuleRepository {
    async fn store(&self, rule: &AutomationRule) -> AutomationRuleRepositoryResult<()> {
        let mut rules = self.rules.write().map_err(lock_error)?;
        if rules.contains_key(&rule.id()) {
            return Err(AutomationRuleRepositoryError::DuplicateRule(rule.id()));
        }
        rules.insert(rule.id(), rule.clone());
        Ok(())
    }

    async fn update(&self, rule: &AutomationRule) -> AutomationRuleRepositoryResult<()> {
        let mut rules = self.rules.write().map_err(lock_error)?;
        let slot = rules
            .get_mut(&rule.id())
            .ok_or(AutomationRuleRepositoryError::NotFound(rule.id()))?;
        *slot = rule.clone();
        Ok(())
    }

    async fn delete(&self, id: AutomationRuleId) -> AutomationRuleRepositoryResult<()> {
        let mut rules = self.rules.write().map_err(lock_error)?;
        rules
            .remove(&id)
            .map(|_| ())
            .ok_or(AutomationRuleRepositoryError::NotFound(id))
    }

    async fn find_by_id(
        &self,
        id: AutomationRuleId,
    ) -> AutomationRuleRepositoryResult<Option<AutomationRule>> {
        let rules = self.rules.read().map_err(lock_error)?;
        Ok(rules.get(&id).cloned())
    }

    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> AutomationRuleRepositoryResult<Vec<AutomationRule>> {
        let rules = self.rules.read().map_err(lock_error)?;
        let mut listed: Vec<AutomationRule> = rules
            .values()
            .filter(|rule| rule.workspace_id() == workspace_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(listed)
    }
}
