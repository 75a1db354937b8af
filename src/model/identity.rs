//! Identity-based equality shared by every labeling entity.
//!
//! Entities are equal when they are the same concrete kind and carry the
//! same identifier. Comparing an entity to anything outside the family is
//! a usage error and is reported as `LabelError::UnsupportedComparison`.

use std::any::{Any, type_name};
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Datum, Label, LabelAssignment, LabeledDatum, Labeler};
use crate::error::{LabelError, Result};

/// Identifier carried by every entity
pub type EntityId = Uuid;

/// The concrete kinds in the identifiable family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Labeler,
    Label,
    Datum,
    LabelAssignment,
    LabeledDatum,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Labeler => "Labeler",
            EntityKind::Label => "Label",
            EntityKind::Datum => "Datum",
            EntityKind::LabelAssignment => "LabelAssignment",
            EntityKind::LabeledDatum => "LabeledDatum",
        };
        f.write_str(name)
    }
}

/// Anything with a stable identity
pub trait Identifiable: Any {
    /// The identifier assigned at construction
    fn id(&self) -> EntityId;

    /// The concrete kind of this entity
    fn kind(&self) -> EntityKind;

    /// Same kind and same identifier
    fn same_identity(&self, other: &dyn Identifiable) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }

    /// Compare against an arbitrary value, rejecting non-identifiables.
    ///
    /// Same `'static` restriction as [`identity_eq`].
    fn try_eq<T: Any>(&self, other: &T) -> Result<bool>
    where
        Self: Sized,
    {
        identity_eq(self, other)
    }
}

/// View a value as an identifiable if it belongs to the family
pub fn as_identifiable(value: &dyn Any) -> Option<&dyn Identifiable> {
    if let Some(v) = value.downcast_ref::<Labeler>() {
        return Some(v);
    }
    if let Some(v) = value.downcast_ref::<Label>() {
        return Some(v);
    }
    if let Some(v) = value.downcast_ref::<Datum>() {
        return Some(v);
    }
    if let Some(v) = value.downcast_ref::<LabelAssignment>() {
        return Some(v);
    }
    if let Some(v) = value.downcast_ref::<LabeledDatum>() {
        return Some(v);
    }
    None
}

/// Typed identity comparison.
///
/// Returns `Ok(true)` only for the same kind and identifier, `Ok(false)`
/// for any other identifiable, and an error for values outside the family.
///
/// `T: Any` implies `T: 'static`, so `rhs` must not borrow non-static data.
/// A reference to an entity such as `&&Datum`, or a foreign value holding a
/// short-lived borrow, does not compile. Dereference first and pass the
/// entity itself: `identity_eq(&a, &*b_ref)`.
pub fn identity_eq<T: Any>(lhs: &dyn Identifiable, rhs: &T) -> Result<bool> {
    match as_identifiable(rhs) {
        Some(other) => Ok(lhs.same_identity(other)),
        None => Err(LabelError::UnsupportedComparison {
            lhs: lhs.kind(),
            rhs: type_name::<T>().to_string(),
        }),
    }
}

/// Implements `Identifiable` and identity-based `PartialEq` for an entity
/// with an `id: EntityId` field.
macro_rules! impl_identifiable {
    ($ty:ty, $kind:expr) => {
        impl $crate::model::Identifiable for $ty {
            fn id(&self) -> $crate::model::EntityId {
                self.id
            }

            fn kind(&self) -> $crate::model::EntityKind {
                $kind
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}
    };
}

pub(crate) use impl_identifiable;
