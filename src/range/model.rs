//! The `Range` value type and its pure update/read operations.
//!
//! A range is treated as an immutable value: `set_hand` never touches the
//! receiver, it returns a new `Range` whose hand map shares every
//! unmodified entry with the original. The `im` persistent map makes that
//! copy-on-write O(log n) with no deep cloning, so previously published
//! ranges stay safe to read from anywhere.

use im::HashMap as ImHashMap;

use crate::action::{normalize_raw, renormalize, ActionWeight, HandActions, RawAction};
use crate::grid::HandKey;

/// A named assignment of action mixtures to hand keys.
///
/// A key absent from the map is semantically present at 100% fold; the map
/// is not required to cover all 169 keys. `id` is a pass-through identity
/// owned by the persistence collaborator — the core neither assigns nor
/// interprets it.
#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    /// Persistence-layer identity, if this range was loaded from storage.
    pub id: Option<String>,
    /// Display name. Must be non-empty to validate.
    pub name: String,
    hands: ImHashMap<HandKey, HandActions>,
}

impl Range {
    /// Create an empty range: name set, no hands painted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            hands: ImHashMap::new(),
        }
    }

    /// Number of painted hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Whether no hand has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Whether `key` is painted (stored explicitly).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        HandKey::parse(key).is_some_and(|k| self.hands.contains_key(&k))
    }

    /// Iterate over painted hands in map order.
    pub fn hands(&self) -> impl Iterator<Item = (&HandKey, &HandActions)> {
        self.hands.iter()
    }

    /// Return a new range with `key` painted with the normalized `entries`.
    ///
    /// An invalid key is a silent no-op: the input range comes back
    /// unchanged. The stored value always goes through the normalizer, so
    /// anything read back out of a mutator-built range is canonical.
    #[must_use]
    pub fn set_hand(&self, key: &str, entries: &[ActionWeight]) -> Range {
        let Some(key) = HandKey::parse(key) else {
            return self.clone();
        };
        Range {
            id: self.id.clone(),
            name: self.name.clone(),
            hands: self.hands.update(key, renormalize(entries)),
        }
    }

    /// [`Range::set_hand`] for wire-form entries (string action names).
    #[must_use]
    pub fn set_hand_raw(&self, key: &str, raw: &[RawAction]) -> Range {
        let Some(key) = HandKey::parse(key) else {
            return self.clone();
        };
        Range {
            id: self.id.clone(),
            name: self.name.clone(),
            hands: self.hands.update(key, normalize_raw(raw)),
        }
    }

    /// Return a new range with `key` unpainted (back to implicit fold).
    #[must_use]
    pub fn clear_hand(&self, key: &str) -> Range {
        let Some(key) = HandKey::parse(key) else {
            return self.clone();
        };
        Range {
            id: self.id.clone(),
            name: self.name.clone(),
            hands: self.hands.without(&key),
        }
    }

    /// Read the mixture for `key`.
    ///
    /// Absent keys return the 100% fold default. Present values are
    /// re-normalized on the way out rather than trusted, which repairs
    /// ranges assembled outside the mutator (e.g. a deserialized file).
    #[must_use]
    pub fn get_hand(&self, key: &str) -> HandActions {
        let Some(key) = HandKey::parse(key) else {
            return HandActions::fold();
        };
        match self.hands.get(&key) {
            Some(stored) => renormalize(stored),
            None => HandActions::fold(),
        }
    }
}
