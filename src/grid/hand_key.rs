//! Hand keys: the 169 canonical starting-hand categories.
//!
//! A key is a pair (`"AA"`), a suited combination (`"AKs"`), or an offsuit
//! combination (`"AKo"`), written high-rank-first. The syntax check is
//! deliberately lenient: it verifies rank membership and suffix only, not
//! canonical ordering, so externally supplied keys like `"KAo"` pass.
//! Callers needing strict canonical keys derive them from the grid catalog.

/// The 13 ranks in display priority order, high first.
pub const RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// Position of a rank character, or `None` if it is not a rank.
#[must_use]
pub fn rank_index(c: char) -> Option<usize> {
    RANKS.iter().position(|&r| r == c)
}

/// A validated starting-hand key.
///
/// Construction goes through [`HandKey::parse`], so a held value always
/// satisfies the (lenient) syntax rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandKey(String);

impl HandKey {
    /// Syntax check: 2-3 characters, first two are ranks, optional third
    /// is `s` or `o`. Does not enforce high-rank-first ordering.
    #[must_use]
    pub fn is_valid(key: &str) -> bool {
        let b = key.as_bytes();
        if b.len() < 2 || b.len() > 3 {
            return false;
        }
        if rank_index(b[0] as char).is_none() || rank_index(b[1] as char).is_none() {
            return false;
        }
        if b.len() == 3 && b[2] != b's' && b[2] != b'o' {
            return false;
        }
        true
    }

    /// Parse a key, returning `None` when the syntax check fails.
    #[must_use]
    pub fn parse(key: &str) -> Option<HandKey> {
        if HandKey::is_valid(key) {
            Some(HandKey(key.to_string()))
        } else {
            None
        }
    }

    /// The key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of two-card combos in this category: 6 for a pair, 4 for a
    /// suited combination, 12 for an offsuit one.
    #[must_use]
    pub fn combos(&self) -> u32 {
        if self.0.len() == 2 {
            6
        } else if self.0.ends_with('s') {
            4
        } else {
            12
        }
    }

    /// Whether this key names a pocket pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.0.len() == 2
    }

    // Catalog-internal constructor for keys built from the rank table.
    pub(crate) fn from_grid(key: String) -> HandKey {
        debug_assert!(HandKey::is_valid(&key));
        HandKey(key)
    }
}

impl AsRef<str> for HandKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HandKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
