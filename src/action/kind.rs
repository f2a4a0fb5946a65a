//! The fixed action vocabulary.
//!
//! Ranges assign hands a mixture of these ten kinds. The set is closed and
//! process-wide constant: the engine never interprets what an action means
//! beyond its label and weight. `FOLD` is the universal default — a hand
//! with no data is treated as 100% fold everywhere.

use serde::{Deserialize, Serialize};

/// One of the ten recognized action kinds, in registry order.
///
/// The wire form is the uppercase label (`"FOLD"`, `"CALL3B"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    #[default]
    Fold,
    Open,
    Call,
    Call3b,
    Raise,
    Overbet,
    Bet3,
    Bet4,
    Bet5,
    Allin,
}

impl Action {
    /// Number of action kinds.
    pub const COUNT: usize = 10;

    /// All actions in registry order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Fold,
        Action::Open,
        Action::Call,
        Action::Call3b,
        Action::Raise,
        Action::Overbet,
        Action::Bet3,
        Action::Bet4,
        Action::Bet5,
        Action::Allin,
    ];

    /// Whether this action counts toward VPIP (every kind except `Fold`).
    #[must_use]
    pub const fn is_vpip(self) -> bool {
        !matches!(self, Action::Fold)
    }

    /// Iterate over the VPIP subset in registry order.
    pub fn voluntary() -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(|a| a.is_vpip())
    }

    /// The uppercase label used on the wire and in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Open => "OPEN",
            Action::Call => "CALL",
            Action::Call3b => "CALL3B",
            Action::Raise => "RAISE",
            Action::Overbet => "OVERBET",
            Action::Bet3 => "BET3",
            Action::Bet4 => "BET4",
            Action::Bet5 => "BET5",
            Action::Allin => "ALLIN",
        }
    }

    /// Display color (hex) for grid cells and stat swatches.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Action::Fold => "#e0e0e0",
            Action::Open => "#4CAF50",
            Action::Call => "#2196F3",
            Action::Call3b => "#00BCD4",
            Action::Raise => "#ff9800",
            Action::Overbet => "#8B0000",
            Action::Bet3 => "#f44336",
            Action::Bet4 => "#9C27B0",
            Action::Bet5 => "#E91E63",
            Action::Allin => "#FFD700",
        }
    }

    /// Position in registry order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a label, case-insensitively.
    ///
    /// Returns `None` for anything outside the vocabulary; the normalizer
    /// drops such entries silently rather than erroring.
    #[must_use]
    pub fn parse(s: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        assert_eq!(Action::ALL.len(), Action::COUNT);
        assert_eq!(Action::ALL[0], Action::Fold);
        assert_eq!(Action::ALL[9], Action::Allin);
        for (i, a) in Action::ALL.into_iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn test_vpip_subset_excludes_fold() {
        let vpip: Vec<_> = Action::voluntary().collect();
        assert_eq!(vpip.len(), Action::COUNT - 1);
        assert!(!vpip.contains(&Action::Fold));
        assert!(!Action::Fold.is_vpip());
        assert!(Action::Open.is_vpip());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Action::parse("OPEN"), Some(Action::Open));
        assert_eq!(Action::parse("open"), Some(Action::Open));
        assert_eq!(Action::parse("Call3b"), Some(Action::Call3b));
        assert_eq!(Action::parse("allin"), Some(Action::Allin));
        assert_eq!(Action::parse("LIMP"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn test_label_parse_round_trip() {
        for a in Action::ALL {
            assert_eq!(Action::parse(a.label()), Some(a));
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Action::Call3b).unwrap();
        assert_eq!(json, "\"CALL3B\"");
        let back: Action = serde_json::from_str("\"FOLD\"").unwrap();
        assert_eq!(back, Action::Fold);
    }

    #[test]
    fn test_default_is_fold() {
        assert_eq!(Action::default(), Action::Fold);
    }
}
