//! A name/value pair representing a classification outcome.

use serde::{Deserialize, Serialize};

use super::identity::{EntityId, EntityKind, impl_identifiable};
use super::value::Value;
use crate::id::new_entity_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    id: EntityId,
    /// Category key, e.g. `dog_type`
    name: String,
    value: Value,
}

impl_identifiable!(Label, EntityKind::Label);

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_id(new_entity_id(), name, value)
    }

    pub fn with_id(id: EntityId, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
