//! Range statistics: per-action distribution and VPIP.
//!
//! Two aggregations with deliberately different denominators:
//!
//! - [`compute_stats`] averages over *painted* hands only. Hands absent
//!   from the map (implicitly 100% fold) are excluded from numerator and
//!   denominator, so VPIP here reads "of the hands you painted, how often
//!   do you put money in". This scoping is part of the contract.
//! - [`compute_combo_stats`] weights by combo counts over the full
//!   1326-combo universe, counting every unpainted hand as fold — the
//!   "whole range" reading.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::action::{renormalize, Action};
use crate::grid::TOTAL_COMBOS;

use super::model::Range;

/// Per-action totals, indexed by registry order.
///
/// Serializes as a `{ "FOLD": .., "OPEN": .., ... }` map in registry order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionTable([f64; Action::COUNT]);

impl ActionTable {
    /// All-zero table.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Value for one action.
    #[must_use]
    pub fn get(&self, action: Action) -> f64 {
        self.0[action.index()]
    }

    /// Add to one action's total.
    pub fn add(&mut self, action: Action, value: f64) {
        self.0[action.index()] += value;
    }

    /// Iterate `(action, value)` in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(|a| (a, self.0[a.index()]))
    }

    /// Divide every entry by `divisor`.
    fn scale_down(&mut self, divisor: f64) {
        for v in &mut self.0 {
            *v /= divisor;
        }
    }

    /// Sum of the VPIP (non-fold) entries.
    #[must_use]
    pub fn vpip_total(&self) -> f64 {
        self.iter()
            .filter(|(a, _)| a.is_vpip())
            .map(|(_, v)| v)
            .sum()
    }
}

impl std::ops::Index<Action> for ActionTable {
    type Output = f64;

    fn index(&self, action: Action) -> &f64 {
        &self.0[action.index()]
    }
}

impl Serialize for ActionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Action::COUNT))?;
        for (action, value) in self.iter() {
            map.serialize_entry(action.label(), &value)?;
        }
        map.end()
    }
}

/// Aggregate statistics for a range.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RangeStats {
    /// Percentage of non-fold action weight.
    pub vpip: f64,
    /// Per-action percentage.
    pub by_action: ActionTable,
}

/// Average per-action percentages across painted hands.
///
/// An empty range yields all zeros. Stored values are re-normalized before
/// accumulation, so out-of-band data cannot skew the averages.
#[must_use]
pub fn compute_stats(range: &Range) -> RangeStats {
    if range.is_empty() {
        return RangeStats::default();
    }

    let mut by_action = ActionTable::zero();
    for (_, stored) in range.hands() {
        for aw in &renormalize(stored) {
            by_action.add(aw.action, aw.weight);
        }
    }
    by_action.scale_down(range.len() as f64);

    RangeStats {
        vpip: by_action.vpip_total(),
        by_action,
    }
}

/// Combo-weighted percentages over the full 1326-combo universe.
///
/// Each painted hand contributes its combo count (6 pair / 4 suited / 12
/// offsuit) split by weight; every unpainted combo counts as fold.
#[must_use]
pub fn compute_combo_stats(range: &Range) -> RangeStats {
    let total = f64::from(TOTAL_COMBOS);
    let mut counts = ActionTable::zero();
    let mut painted = 0.0;

    for (key, stored) in range.hands() {
        let combos = f64::from(key.combos());
        painted += combos;
        for aw in &renormalize(stored) {
            counts.add(aw.action, combos * aw.weight / 100.0);
        }
    }
    counts.add(Action::Fold, total - painted);
    counts.scale_down(total / 100.0);

    RangeStats {
        vpip: counts.vpip_total(),
        by_action: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionWeight;

    fn aw(action: Action, weight: f64) -> ActionWeight {
        ActionWeight::new(action, weight)
    }

    #[test]
    fn test_empty_range_all_zero() {
        let stats = compute_stats(&Range::new("x"));
        assert_eq!(stats.vpip, 0.0);
        for (_, v) in stats.by_action.iter() {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_single_hand_scenario() {
        let range = Range::new("R").set_hand("AKs", &[aw(Action::Open, 60.0), aw(Action::Fold, 40.0)]);
        let stats = compute_stats(&range);

        assert!((stats.vpip - 60.0).abs() < 1e-9);
        assert!((stats.by_action[Action::Open] - 60.0).abs() < 1e-9);
        assert!((stats.by_action[Action::Fold] - 40.0).abs() < 1e-9);
        assert_eq!(stats.by_action[Action::Call], 0.0);
    }

    #[test]
    fn test_denominator_is_painted_hands_only() {
        // Two painted hands out of 169; the average divides by 2, not 169.
        let range = Range::new("R")
            .set_hand("AA", &[aw(Action::Open, 100.0)])
            .set_hand("72o", &[aw(Action::Fold, 100.0)]);
        let stats = compute_stats(&range);

        assert!((stats.by_action[Action::Open] - 50.0).abs() < 1e-9);
        assert!((stats.by_action[Action::Fold] - 50.0).abs() < 1e-9);
        assert!((stats.vpip - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_averages_sum_to_100() {
        let range = Range::new("R")
            .set_hand("AA", &[aw(Action::Open, 70.0), aw(Action::Allin, 30.0)])
            .set_hand("KK", &[aw(Action::Call, 100.0)])
            .set_hand("T9s", &[aw(Action::Fold, 100.0)]);
        let stats = compute_stats(&range);

        let total: f64 = stats.by_action.iter().map(|(_, v)| v).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_combo_stats_single_pair() {
        // AA painted 100% OPEN: 6 of 1326 combos open, the rest fold.
        let range = Range::new("R").set_hand("AA", &[aw(Action::Open, 100.0)]);
        let stats = compute_combo_stats(&range);

        let open_pct = 6.0 / 1326.0 * 100.0;
        assert!((stats.by_action[Action::Open] - open_pct).abs() < 1e-9);
        assert!((stats.by_action[Action::Fold] - (100.0 - open_pct)).abs() < 1e-9);
        assert!((stats.vpip - open_pct).abs() < 1e-9);
    }

    #[test]
    fn test_combo_stats_empty_range_all_fold() {
        let stats = compute_combo_stats(&Range::new("x"));
        assert_eq!(stats.vpip, 0.0);
        assert!((stats.by_action[Action::Fold] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_combo_stats_split_weights() {
        // AKo (12 combos) half open, half fold.
        let range = Range::new("R").set_hand("AKo", &[aw(Action::Open, 50.0), aw(Action::Fold, 50.0)]);
        let stats = compute_combo_stats(&range);

        let open_pct = 6.0 / 1326.0 * 100.0;
        assert!((stats.by_action[Action::Open] - open_pct).abs() < 1e-9);
        assert!((stats.vpip - open_pct).abs() < 1e-9);
    }

    #[test]
    fn test_stats_serialize_as_map() {
        let stats = compute_stats(&Range::new("x"));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["vpip"], 0.0);
        assert_eq!(json["by_action"]["FOLD"], 0.0);
        assert_eq!(json["by_action"]["ALLIN"], 0.0);
    }
}
