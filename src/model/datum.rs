//! Data items, unlabeled and labeled.

use serde::{Deserialize, Serialize};

use super::assignment::LabelAssignment;
use super::identity::{EntityId, EntityKind, impl_identifiable};
use super::label::Label;
use super::labeler::Labeler;
use super::value::Value;
use crate::id::new_entity_id;

/// An unlabeled unit of data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datum {
    id: EntityId,
    value: Value,
}

impl_identifiable!(Datum, EntityKind::Datum);

impl Datum {
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_id(new_entity_id(), value)
    }

    pub fn with_id(id: EntityId, value: impl Into<Value>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A datum plus its history of label assignments.
///
/// Assignments are append-only and kept in insertion order. Each one holds
/// a plain `Datum` snapshot, never a `LabeledDatum`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledDatum {
    id: EntityId,
    value: Value,
    #[serde(default)]
    ground_label: Option<Label>,
    #[serde(default)]
    assignments: Vec<LabelAssignment>,
}

impl_identifiable!(LabeledDatum, EntityKind::LabeledDatum);

impl LabeledDatum {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: new_entity_id(),
            value: value.into(),
            ground_label: None,
            assignments: Vec::new(),
        }
    }

    /// Same id and value as `base`, no ground label, no assignments
    pub fn from_base_datum(base: &Datum) -> Self {
        Self {
            id: base.id,
            value: base.value.clone(),
            ground_label: None,
            assignments: Vec::new(),
        }
    }

    pub fn with_ground_label(mut self, label: Label) -> Self {
        self.ground_label = Some(label);
        self
    }

    pub fn set_ground_label(&mut self, label: Option<Label>) {
        self.ground_label = label;
    }

    /// Unlabeled snapshot of this item
    pub fn base(&self) -> Datum {
        Datum::with_id(self.id, self.value.clone())
    }

    /// Append a new assignment of `label` by `labeler` and return it
    pub fn record_label(&mut self, labeler: &Labeler, label: &Label) -> &LabelAssignment {
        let assignment = LabelAssignment::new(self.base(), labeler.clone(), label.clone());
        log::debug!(
            "Recording label {}={} on datum {}",
            label.name(),
            label.value(),
            self.id
        );
        let index = self.assignments.len();
        self.assignments.push(assignment);
        &self.assignments[index]
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn ground_label(&self) -> Option<&Label> {
        self.ground_label.as_ref()
    }

    pub fn assignments(&self) -> &[LabelAssignment] {
        &self.assignments
    }

    pub fn latest_assignment(&self) -> Option<&LabelAssignment> {
        self.assignments.last()
    }
}

impl From<&LabeledDatum> for Datum {
    fn from(labeled: &LabeledDatum) -> Self {
        labeled.base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DogImage, Identifiable, ImageUrl};
    use serde_json::json;

    fn new_labeler() -> Labeler {
        Labeler::new(Some("test".to_string()), Some("test@example.org")).unwrap()
    }

    fn new_datum() -> Datum {
        Datum::new(Value::Text("This is a test sentence about dogs".to_string()))
    }

    #[test]
    fn test_from_base_datum_copies_identity() {
        let datum = new_datum();
        let labeled = LabeledDatum::from_base_datum(&datum);

        assert_eq!(labeled.id(), datum.id());
        assert_eq!(labeled.value(), datum.value());
        assert!(labeled.assignments().is_empty());
        assert!(labeled.ground_label().is_none());
    }

    #[test]
    fn test_record_label() {
        let labeler = new_labeler();
        let mut labeled = LabeledDatum::from_base_datum(&new_datum());
        let label = Label::new("is_dog", Value::Bool(true));

        let recorded_id = labeled.record_label(&labeler, &label).id();

        assert_eq!(labeled.assignments().len(), 1);
        let assignment = &labeled.assignments()[0];
        assert_eq!(assignment.id(), recorded_id);
        assert_eq!(assignment.label(), &label);
        assert_eq!(assignment.labeler(), &labeler);
        assert_eq!(assignment.datum().kind(), EntityKind::Datum);
        assert_eq!(assignment.datum().id(), labeled.id());
        assert_eq!(assignment.datum().value(), labeled.value());
    }

    #[test]
    fn test_record_label_appends_in_order() {
        let labeler = new_labeler();
        let mut labeled = LabeledDatum::new("cherry");
        let yes = Label::new("is_red", true);
        let no = Label::new("is_red", false);

        labeled.record_label(&labeler, &yes);
        labeled.record_label(&labeler, &no);

        let labels: Vec<&Label> = labeled.assignments().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec![&yes, &no]);
        assert_eq!(labeled.latest_assignment().map(|a| a.label()), Some(&no));
        assert!(labeled.assignments()[0].timestamp() < labeled.assignments()[1].timestamp());
    }

    #[test]
    fn test_snapshot_does_not_nest_history() {
        let labeler = new_labeler();
        let mut labeled = LabeledDatum::new("banana");
        labeled.record_label(&labeler, &Label::new("is_red", false));
        labeled.record_label(&labeler, &Label::new("is_red", true));

        let json = serde_json::to_value(&labeled).unwrap();
        let snapshot = &json["assignments"][1]["datum"];
        assert!(snapshot.get("assignments").is_none());
        assert!(snapshot.get("ground_label").is_none());
    }

    #[test]
    fn test_structured_value_survives_derivation() {
        let dog = DogImage {
            message: ImageUrl::parse("https://images.dog.ceo/breeds/pug/n02110958_1975.jpg").unwrap(),
        };
        let datum = Datum::new(Value::Image(dog.clone()));
        let labeled = LabeledDatum::from_base_datum(&datum);

        assert_eq!(labeled.value().as_image(), Some(&dog));

        let nested = Datum::new(Value::Structured(json!({"breed": "pug", "size": [1, 2]})));
        let labeled = LabeledDatum::from_base_datum(&nested);
        assert!(matches!(labeled.value(), Value::Structured(v) if v["breed"] == "pug"));
    }

    #[test]
    fn test_ground_label() {
        let truth = Label::new("dog_type", Value::Category("small_doggo".to_string()));
        let mut labeled = LabeledDatum::new("pug").with_ground_label(truth.clone());
        assert_eq!(labeled.ground_label(), Some(&truth));

        labeled.set_ground_label(None);
        assert!(labeled.ground_label().is_none());
    }

    #[test]
    fn test_labeled_datum_json_roundtrip() {
        let mut labeled = LabeledDatum::new("cherry").with_ground_label(Label::new("is_red", true));
        labeled.record_label(&new_labeler(), &Label::new("is_red", true));

        let line = serde_json::to_string(&labeled).unwrap();
        let restored: LabeledDatum = serde_json::from_str(&line).unwrap();

        assert_eq!(restored, labeled);
        assert_eq!(restored.value(), labeled.value());
        assert_eq!(restored.ground_label(), labeled.ground_label());
        assert_eq!(restored.assignments(), labeled.assignments());
        assert_eq!(
            restored.assignments()[0].timestamp(),
            labeled.assignments()[0].timestamp()
        );
    }
}
