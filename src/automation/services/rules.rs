//! Authoring, toggling and deleting automation rules.

use crate::automation::{
    domain::{
        AutomationDomainError, AutomationRule, AutomationRuleId, AutomationRulePatch,
        NewAutomationRule,
    },
    ports::{AutomationRuleRepository, AutomationRuleRepositoryError},
};
use crate::workspace::domain::WorkspaceSession;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for automation rule operations.
#[derive(Debug, Error)]
pub enum AutomationServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AutomationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AutomationRuleRepositoryError),
}

/// Result type for automation service operations.
pub type AutomationServiceResult<T> = Result<T, AutomationServiceError>;

/// Automation rule orchestration service.
pub struct AutomationService<R, C>
where
    R: AutomationRuleRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for AutomationService<R, C>
where
    R: AutomationRuleRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> AutomationService<R, C>
where
    R: AutomationRuleRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new automation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists the session workspace's rules, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationServiceError::Repository`] when listing fails.
    pub async fn list_rules(
        &self,
        session: &WorkspaceSession,
    ) -> AutomationServiceResult<Vec<AutomationRule>> {
        Ok(self
            .repository
            .list_for_workspace(session.workspace_id())
            .await?)
    }

    /// Creates an active rule with its actions numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationServiceError`] when validation or storage fails.
    pub async fn create_rule(
        &self,
        session: &WorkspaceSession,
        request: NewAutomationRule,
    ) -> AutomationServiceResult<AutomationRule> {
        let rule = AutomationRule::new(session.workspace_id(), request, &*self.clock)?;
        self.repository.store(&rule).await?;
        tracing::info!(
            workspace_id = %session.workspace_id(),
            rule_id = %rule.id(),
            trigger = %rule.trigger(),
            actions = rule.actions().len(),
            "automation rule created"
        );
        Ok(rule)
    }

    /// Edits a rule's name, trigger, filters or actions.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationServiceError`] when the rule is not in the session
    /// workspace, the patch is invalid, or storage fails.
    pub async fn update_rule(
        &self,
        session: &WorkspaceSession,
        id: AutomationRuleId,
        patch: AutomationRulePatch,
    ) -> AutomationServiceResult<AutomationRule> {
        let mut rule = self.find_rule(session, id).await?;
        rule.apply_patch(patch, &*self.clock)?;
        self.repository.update(&rule).await?;
        Ok(rule)
    }

    /// Switches a rule on or off.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationServiceError`] when the rule is not in the session
    /// workspace or storage fails.
    pub async fn set_active(
        &self,
        session: &WorkspaceSession,
        id: AutomationRuleId,
        is_active: bool,
    ) -> AutomationServiceResult<AutomationRule> {
        let mut rule = self.find_rule(session, id).await?;
        rule.set_active(is_active, &*self.clock);
        self.repository.update(&rule).await?;
        tracing::debug!(
            workspace_id = %session.workspace_id(),
            rule_id = %id,
            is_active,
            "automation rule toggled"
        );
        Ok(rule)
    }

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationServiceError`] when the rule is not in the session
    /// workspace or storage fails.
    pub async fn delete_rule(
        &self,
        session: &WorkspaceSession,
        id: AutomationRuleId,
    ) -> AutomationServiceResult<()> {
        self.find_rule(session, id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn find_rule(
        &self,
        session: &WorkspaceSession,
        id: AutomationRuleId,
    ) -> AutomationServiceResult<AutomationRule> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|rule| session.owns(rule.workspace_id()))
            .ok_or_else(|| AutomationRuleRepositoryError::NotFound(id).into())
    }
}
