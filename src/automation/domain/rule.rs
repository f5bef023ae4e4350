//! Automation rule aggregate.

use super::action::number_steps;
use super::{ActionStep, AutomationDomainError, AutomationRuleId, ConditionNode, TriggerEvent};
use crate::workspace::domain::WorkspaceId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A stored trigger, filter tree and action chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationRule {
    id: AutomationRuleId,
    workspace_id: WorkspaceId,
    name: String,
    trigger: TriggerEvent,
    filters: ConditionNode,
    actions: Vec<ActionStep>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for authoring a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAutomationRule {
    /// Display name.
    pub name: String,
    /// Trigger event.
    pub trigger: TriggerEvent,
    /// Filter tree; defaults to an empty `All` group.
    pub filters: ConditionNode,
    /// Action chain in execution order.
    pub actions: Vec<ActionStep>,
}

impl NewAutomationRule {
    /// Creates a rule request with no filters and no actions.
    #[must_use]
    pub fn new(name: impl Into<String>, trigger: TriggerEvent) -> Self {
        Self {
            name: name.into(),
            trigger,
            filters: ConditionNode::default(),
            actions: Vec::new(),
        }
    }

    /// Sets the filter tree.
    #[must_use]
    pub fn with_filters(mut self, filters: ConditionNode) -> Self {
        self.filters = filters;
        self
    }

    /// Appends an action.
    #[must_use]
    pub fn then(mut self, action: ActionStep) -> Self {
        self.actions.push(action);
        self
    }
}

/// Partial update of a rule. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutomationRulePatch {
    /// New name.
    pub name: Option<String>,
    /// New trigger.
    pub trigger: Option<TriggerEvent>,
    /// Replacement filter tree.
    pub filters: Option<ConditionNode>,
    /// Replacement action chain, renumbered on write.
    pub actions: Option<Vec<ActionStep>>,
}

impl AutomationRule {
    /// Creates an active rule.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationDomainError`] when the name is blank or a filter
    /// or action is invalid.
    pub fn new(
        workspace_id: WorkspaceId,
        request: NewAutomationRule,
        clock: &impl Clock,
    ) -> Result<Self, AutomationDomainError> {
        let NewAutomationRule {
            name,
            trigger,
            filters,
            actions,
        } = request;
        filters.validate()?;
        let timestamp = clock.utc();
        Ok(Self {
            id: AutomationRuleId::new(),
            workspace_id,
            name: normalize_name(&name)?,
            trigger,
            filters,
            actions: number_steps(actions)?,
            is_active: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the rule identifier.
    #[must_use]
    pub const fn id(&self) -> AutomationRuleId {
        self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trigger event.
    #[must_use]
    pub const fn trigger(&self) -> &TriggerEvent {
        &self.trigger
    }

    /// Returns the filter tree.
    #[must_use]
    pub const fn filters(&self) -> &ConditionNode {
        &self.filters
    }

    /// Returns the action chain, numbered from 1.
    #[must_use]
    pub fn actions(&self) -> &[ActionStep] {
        &self.actions
    }

    /// Returns `true` when the rule is switched on.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a patch; nothing changes when any part is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationDomainError`] describing the first violation.
    pub fn apply_patch(
        &mut self,
        patch: AutomationRulePatch,
        clock: &impl Clock,
    ) -> Result<(), AutomationDomainError> {
        let name = patch.name.as_deref().map(normalize_name).transpose()?;
        if let Some(filters) = &patch.filters {
            filters.validate()?;
        }
        let actions = patch.actions.map(number_steps).transpose()?;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = patch.trigger {
            self.trigger = value;
        }
        if let Some(value) = patch.filters {
            self.filters = value;
        }
        if let Some(value) = actions {
            self.actions = value;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Switches the rule on or off.
    pub fn set_active(&mut self, is_active: bool, clock: &impl Clock) {
        self.is_active = is_active;
        self.updated_at = clock.utc();
    }
}

fn normalize_name(name: &str) -> Result<String, AutomationDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AutomationDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
