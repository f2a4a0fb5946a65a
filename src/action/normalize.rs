//! The action-list normalizer.
//!
//! Everything stored in a range flows through here. The contract is total:
//! whatever the input looks like, the output is a well-formed mixture —
//! known actions only, no duplicates, weights in [0, 100], summing to
//! exactly 100. Malformed or partial input degrades to the 100% fold
//! default instead of erroring; strictness lives in the validator, not here.
//!
//! Two entry points share one algorithm:
//! - [`normalize_raw`] takes wire entries with string action names
//!   (file import, persistence payloads);
//! - [`renormalize`] takes already-typed entries (stored values, paint
//!   output) and skips only the vocabulary lookup.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::Action;
use super::weight::{ActionWeight, HandActions};

/// A wire-form action entry: action referenced by name, weight unchecked.
///
/// This is what the JSON record carries per hand. Unknown names and junk
/// weights are tolerated here and cleaned by [`normalize_raw`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    pub action: String,
    pub weight: f64,
}

impl RawAction {
    /// Create a new wire entry.
    #[must_use]
    pub fn new(action: impl Into<String>, weight: f64) -> Self {
        Self {
            action: action.into(),
            weight,
        }
    }
}

/// Normalize wire entries into a canonical mixture.
///
/// Unknown actions are dropped silently (case-insensitive match against
/// the vocabulary); later duplicates lose to the first occurrence; weights
/// are clamped to [0, 100] with non-finite values coerced to 0. If nothing
/// usable remains, or the cleaned weights sum to zero, the result is the
/// 100% fold default.
#[must_use]
pub fn normalize_raw(raw: &[RawAction]) -> HandActions {
    let mut cleaned: SmallVec<[ActionWeight; 4]> = SmallVec::new();
    let mut seen = [false; Action::COUNT];

    for entry in raw {
        let Some(action) = Action::parse(&entry.action) else {
            continue;
        };
        if seen[action.index()] {
            continue;
        }
        seen[action.index()] = true;
        cleaned.push(ActionWeight::new(action, clamp_weight(entry.weight)));
    }

    finish(cleaned)
}

/// Normalize already-typed entries into a canonical mixture.
///
/// Same cleaning as [`normalize_raw`] minus the vocabulary lookup.
/// Idempotent: renormalizing canonical output returns it unchanged.
#[must_use]
pub fn renormalize(entries: &[ActionWeight]) -> HandActions {
    let mut cleaned: SmallVec<[ActionWeight; 4]> = SmallVec::new();
    let mut seen = [false; Action::COUNT];

    for entry in entries {
        if seen[entry.action.index()] {
            continue;
        }
        seen[entry.action.index()] = true;
        cleaned.push(ActionWeight::new(entry.action, clamp_weight(entry.weight)));
    }

    finish(cleaned)
}

/// Clamp into [0, 100]; NaN and infinities become 0.
fn clamp_weight(w: f64) -> f64 {
    if w.is_finite() {
        w.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Shared tail of the algorithm: fall back to fold on empty or zero-sum
/// input, otherwise rescale so the weights sum to exactly 100.
fn finish(mut cleaned: SmallVec<[ActionWeight; 4]>) -> HandActions {
    if cleaned.is_empty() {
        return HandActions::fold();
    }
    let sum: f64 = cleaned.iter().map(|aw| aw.weight).sum();
    if sum <= 0.0 {
        return HandActions::fold();
    }
    rescale_to_100(&mut cleaned, sum);
    HandActions(cleaned)
}

/// Rescale every weight by `100 / sum`, then push the floating-point
/// residual into the last element so the total is 100 by construction.
///
/// Also used by the paint compiler, which trusts its (typed) input and
/// only needs this tail.
pub(crate) fn rescale_to_100(entries: &mut SmallVec<[ActionWeight; 4]>, sum: f64) {
    for aw in entries.iter_mut() {
        aw.weight = aw.weight / sum * 100.0;
    }
    let rescaled: f64 = entries.iter().map(|aw| aw.weight).sum();
    if let Some(last) = entries.last_mut() {
        last.weight += 100.0 - rescaled;
    }
}
