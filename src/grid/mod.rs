//! Hand-key syntax and the 13x13 grid catalog.

pub mod cells;
pub mod hand_key;

pub use cells::{enumerate_hands, GridCell};
pub use hand_key::{rank_index, HandKey, RANKS};

/// Total number of two-card combos across the full grid.
pub const TOTAL_COMBOS: u32 = 1326;
