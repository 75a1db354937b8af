//! Timestamped record of a label being assigned to a datum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datum::Datum;
use super::identity::{EntityId, EntityKind, impl_identifiable};
use super::label::Label;
use super::labeler::Labeler;
use crate::id::{assignment_timestamp, new_entity_id};

/// Immutable once created. `datum` is always the unlabeled snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelAssignment {
    id: EntityId,
    timestamp: DateTime<Utc>,
    datum: Datum,
    labeler: Labeler,
    label: Label,
}

impl_identifiable!(LabelAssignment, EntityKind::LabelAssignment);

impl LabelAssignment {
    pub fn new(datum: Datum, labeler: Labeler, label: Label) -> Self {
        Self {
            id: new_entity_id(),
            timestamp: assignment_timestamp(),
            datum,
            labeler,
            label,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    pub fn labeler(&self) -> &Labeler {
        &self.labeler
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn fixtures() -> (Datum, Labeler, Label) {
        let datum = Datum::new(Value::Text("This is a test sentence about dogs".to_string()));
        let labeler = Labeler::new(Some("test".to_string()), Some("test@example.org")).unwrap();
        let label = Label::new("size_class", Value::Category("big_pupper".to_string()));
        (datum, labeler, label)
    }

    #[test]
    fn test_back_to_back_assignments_differ() {
        let (datum, labeler, label) = fixtures();
        let first = LabelAssignment::new(datum.clone(), labeler.clone(), label.clone());
        let second = LabelAssignment::new(datum, labeler, label);

        assert_ne!(first, second);
        assert_ne!(first.timestamp(), second.timestamp());
        assert!(first.timestamp() < second.timestamp());
    }

    #[test]
    fn test_assignment_keeps_references_by_identity() {
        let (datum, labeler, label) = fixtures();
        let assignment = LabelAssignment::new(datum.clone(), labeler.clone(), label.clone());

        assert_eq!(assignment.datum(), &datum);
        assert_eq!(assignment.labeler(), &labeler);
        assert_eq!(assignment.label(), &label);
    }

    #[test]
    fn test_timestamp_serializes_as_rfc3339_utc() {
        let (datum, labeler, label) = fixtures();
        let assignment = LabelAssignment::new(datum, labeler, label);
        let json = serde_json::to_value(&assignment).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'));

        let restored: LabelAssignment = serde_json::from_value(json).unwrap();
        assert_eq!(restored.timestamp(), assignment.timestamp());
    }
}
