//! The wire record.
//!
//! `RangeRecord` is the JSON shape persisted and transmitted by host
//! layers: `{ id?, name, hands: { "AKs": [{ action, weight }, ...] } }`.
//! The core treats it as a pass-through — `id` belongs to the persistence
//! collaborator, and hand entries stay in raw string form until they cross
//! into a typed `Range` through the normalizer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::RawAction;
use crate::grid::HandKey;

use super::model::Range;

/// Serialized form of a range.
///
/// `hands` is a `BTreeMap` so exports are byte-stable regardless of paint
/// order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeRecord {
    /// Persistence identity; omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub hands: BTreeMap<String, Vec<RawAction>>,
}

impl Range {
    /// Build a typed range from a wire record.
    ///
    /// Follows mutator semantics: entries with invalid keys are skipped
    /// silently and every kept value is normalized. Hosts wanting loud
    /// failures run [`crate::range::validate_record`] on the record first.
    #[must_use]
    pub fn from_record(record: &RangeRecord) -> Range {
        let mut range = Range::new(record.name.clone());
        range.id = record.id.clone();
        for (key, raw) in &record.hands {
            range = range.set_hand_raw(key, raw);
        }
        range
    }

    /// Serialize this range back into wire form.
    #[must_use]
    pub fn to_record(&self) -> RangeRecord {
        RangeRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            hands: self
                .hands()
                .map(|(key, actions)| {
                    let raw = actions
                        .iter()
                        .map(|aw| RawAction::new(aw.action.label(), aw.weight))
                        .collect();
                    (key.to_string(), raw)
                })
                .collect(),
        }
    }
}

// Convenience for hosts that index records by validated key.
impl RangeRecord {
    /// Iterate entries whose keys pass the syntax check.
    pub fn valid_hands(&self) -> impl Iterator<Item = (&str, &[RawAction])> {
        self.hands
            .iter()
            .filter(|(k, _)| HandKey::is_valid(k))
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
