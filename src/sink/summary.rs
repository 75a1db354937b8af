//! Tallies over persisted labeled data.

use std::collections::BTreeMap;

use crate::model::LabeledDatum;

/// Assignment counts keyed by label name, then label value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub items: usize,
    pub assignments: usize,
    pub by_label: BTreeMap<String, BTreeMap<String, usize>>,
}

impl LabelCounts {
    pub fn from_items(items: &[LabeledDatum]) -> Self {
        let mut counts = Self {
            items: items.len(),
            ..Self::default()
        };
        for assignment in items.iter().flat_map(|item| item.assignments()) {
            counts.assignments += 1;
            let label = assignment.label();
            *counts
                .by_label
                .entry(label.name().to_string())
                .or_default()
                .entry(label.value().to_string())
                .or_default() += 1;
        }
        counts
    }

    pub fn count(&self, name: &str, value: &str) -> usize {
        self.by_label
            .get(name)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }
}
