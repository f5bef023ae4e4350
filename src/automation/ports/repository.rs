//! Repository port for automation rules.

use crate::automation::domain::{AutomationRule, AutomationRuleId};
use crate::workspace::domain::WorkspaceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for automation rule repository operations.
pub type AutomationRuleRepositoryResult<T> = Result<T, AutomationRuleRepositoryError>;

/// Automation rule persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AutomationRuleRepository: Send + Sync {
    /// Stores a new rule.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationRuleRepositoryError::DuplicateRule`] when the
    /// identifier already exists.
    async fn store(&self, rule: &AutomationRule) -> AutomationRuleRepositoryResult<()>;

    /// Persists changes to an existing rule.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationRuleRepositoryError::NotFound`] when the rule does
    /// not exist.
    async fn update(&self, rule: &AutomationRule) -> AutomationRuleRepositoryResult<()>;

    /// Removes a rule.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationRuleRepositoryError::NotFound`] when the rule does
    /// not exist.
    async fn delete(&self, id: AutomationRuleId) -> AutomationRuleRepositoryResult<()>;

    /// Finds a rule by identifier.
    async fn find_by_id(
        &self,
        id: AutomationRuleId,
    ) -> AutomationRuleRepositoryResult<Option<AutomationRule>>;

    /// Returns a workspace's rules, oldest first.
    async fn list_for_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> AutomationRuleRepositoryResult<Vec<AutomationRule>>;
}

/// Errors returned by automation rule repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AutomationRuleRepositoryError {
    /// A rule with the same identifier already exists.
    #[error("duplicate automation rule identifier: {0}")]
    DuplicateRule(AutomationRuleId),

    /// The rule was not found.
    #[error("automation rule not found: {0}")]
    NotFound(AutomationRuleId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AutomationRuleRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
