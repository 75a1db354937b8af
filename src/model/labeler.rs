//! The human or system assigning labels.

use serde::{Deserialize, Serialize};

use super::email::EmailAddress;
use super::identity::{EntityId, EntityKind, impl_identifiable};
use crate::error::Result;
use crate::id::new_entity_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labeler {
    id: EntityId,
    name: Option<String>,
    email: Option<EmailAddress>,
}

impl_identifiable!(Labeler, EntityKind::Labeler);

impl Labeler {
    /// Create a labeler, validating the email address if one is given
    pub fn new(name: Option<String>, email: Option<&str>) -> Result<Self> {
        let email = email.map(EmailAddress::parse).transpose()?;
        Ok(Self {
            id: new_entity_id(),
            name,
            email,
        })
    }

    /// Create a labeler with a known identifier
    pub fn with_id(id: EntityId, name: Option<String>, email: Option<EmailAddress>) -> Self {
        Self { id, name, email }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }
}
