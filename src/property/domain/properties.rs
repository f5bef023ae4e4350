//! Per-task property value document.

use super::{PropertyDefinition, PropertyDefinitionId, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property values stored on one task, keyed by definition id.
///
/// Entries whose definition was removed or re-kinded stay in the document;
/// [`TaskProperties::typed_value`] hides the ones that no longer match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskProperties(BTreeMap<PropertyDefinitionId, PropertyValue>);

impl TaskProperties {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value, whatever its kind.
    #[must_use]
    pub fn get(&self, id: PropertyDefinitionId) -> Option<&PropertyValue> {
        self.0.get(&id)
    }

    /// Returns the stored value only when it still matches the definition's
    /// kind.
    #[must_use]
    pub fn typed_value(&self, definition: &PropertyDefinition) -> Option<&PropertyValue> {
        self.get(definition.id())
            .filter(|value| value.kind() == definition.kind())
    }

    /// Stores or clears a value without validation.
    ///
    /// Callers validate through [`PropertyDefinition::validate`] first.
    pub fn put(&mut self, id: PropertyDefinitionId, value: Option<PropertyValue>) {
        match value {
            Some(value) => {
                self.0.insert(id, value);
            }
            None => {
                self.0.remove(&id);
            }
        }
    }

    /// Iterates over stored entries in definition-id order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyDefinitionId, &PropertyValue)> {
        self.0.iter()
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
