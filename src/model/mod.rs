//! Core labeling data model
//!
//! - Identifiable: identity-based equality shared by every entity
//! - Labeler: who assigns labels
//! - Label: a name/value classification outcome
//! - Datum / LabeledDatum: items to classify and their label history
//! - LabelAssignment: immutable timestamped assignment record

pub mod assignment;
pub mod datum;
pub mod email;
pub mod identity;
pub mod label;
pub mod labeler;
pub mod value;

pub use assignment::LabelAssignment;
pub use datum::{Datum, LabeledDatum};
pub use email::EmailAddress;
pub use identity::{EntityId, EntityKind, Identifiable, as_identifiable, identity_eq};
pub use label::Label;
pub use labeler::Labeler;
pub use value::{DogImage, ImageUrl, Value};
