//! The validation boundary.
//!
//! Everything else in the crate degrades silently; this is the one place
//! that fails loudly. Validation stops at the first violated rule and
//! names the offending hand key, so the message can go straight to the
//! user. There is no recoverable/fatal split: every failure here is
//! user-correctable input.

use thiserror::Error;

use crate::action::{normalize_raw, renormalize};
use crate::grid::HandKey;

use super::model::Range;
use super::record::RangeRecord;

/// Weight sums may drift this far from 100 before a hand is rejected.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// A violated range invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("range name required")]
    MissingName,
    #[error("invalid hand key: {0}")]
    InvalidHandKey(String),
    #[error("hand {0} weights do not sum to 100")]
    WeightSumMismatch(String),
}

/// Validate a wire record before turning it into a `Range`.
///
/// Checks in order: non-empty name, then per hand entry the key syntax and
/// the normalized weight sum. The sum check is redundant for data that
/// went through the normalizer (which reconstructs an exact 100); it stays
/// as the contract boundary for callers handing over pre-normalized data.
pub fn validate_record(record: &RangeRecord) -> Result<(), ValidationError> {
    if record.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    for (key, raw) in &record.hands {
        if !HandKey::is_valid(key) {
            return Err(ValidationError::InvalidHandKey(key.clone()));
        }
        let sum = normalize_raw(raw).weight_sum();
        if (sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch(key.clone()));
        }
    }
    Ok(())
}

impl Range {
    /// Validate a typed range.
    ///
    /// Keys are valid by construction here, so only the name and the
    /// per-hand weight sums are checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        for (key, stored) in self.hands() {
            let sum = renormalize(stored).weight_sum();
            if (sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(ValidationError::WeightSumMismatch(key.to_string()));
            }
        }
        Ok(())
    }
}
