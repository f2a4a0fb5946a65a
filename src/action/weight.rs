//! Weighted action mixes.
//!
//! `HandActions` is the value stored per hand: an ordered list of
//! `(action, weight)` pairs. Canonical form (what the normalizer produces)
//! has pairwise-distinct actions and weights summing to exactly 100.
//!
//! The type is serde-transparent on purpose: data loaded from outside the
//! mutator (file import, hand-written JSON) may be non-canonical, and
//! `Range::get_hand` repairs it on read instead of rejecting it.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::kind::Action;

/// One action and the percentage of the time it is taken.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionWeight {
    pub action: Action,
    pub weight: f64,
}

impl ActionWeight {
    /// Create a new pair.
    #[must_use]
    pub const fn new(action: Action, weight: f64) -> Self {
        Self { action, weight }
    }
}

/// An ordered action mixture for a single hand.
///
/// Backed by a `SmallVec` sized for the 4-layer paint UI, so the common
/// case never heap-allocates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandActions(pub(crate) SmallVec<[ActionWeight; 4]>);

impl HandActions {
    /// The canonical "no data" value: 100% fold.
    #[must_use]
    pub fn fold() -> Self {
        Self(smallvec![ActionWeight::new(Action::Fold, 100.0)])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty (never true for normalizer output).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View as a slice of pairs.
    #[must_use]
    pub fn as_slice(&self) -> &[ActionWeight] {
        &self.0
    }

    /// Sum of all weights.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.0.iter().map(|aw| aw.weight).sum()
    }

    /// Total weight assigned to `action` (0 if absent).
    #[must_use]
    pub fn weight_of(&self, action: Action) -> f64 {
        self.0
            .iter()
            .filter(|aw| aw.action == action)
            .map(|aw| aw.weight)
            .sum()
    }
}

impl std::ops::Deref for HandActions {
    type Target = [ActionWeight];

    fn deref(&self) -> &[ActionWeight] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a HandActions {
    type Item = &'a ActionWeight;
    type IntoIter = std::slice::Iter<'a, ActionWeight>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ActionWeight> for HandActions {
    fn from_iter<I: IntoIterator<Item = ActionWeight>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
