//! # holdem-range
//!
//! A preflop range model for Hold'em: the 13x13 starting-hand grid,
//! weighted action mixtures per hand, and the logic to keep that structure
//! well-formed and to summarize it.
//!
//! ## Design Principles
//!
//! 1. **Immutable Values**: A `Range` is never mutated in place. Every
//!    update returns a new value; the persistent hand map (`im`) shares
//!    unmodified entries, so "copies" are cheap and published ranges are
//!    safe to read concurrently without locking.
//!
//! 2. **Silent Degradation at the Edges**: The normalizer, the mutator,
//!    and the paint compiler never fail — malformed or partial input
//!    degrades to the 100% fold default. Strictness lives in exactly one
//!    place, the validator, which reports the first violated invariant.
//!
//! 3. **No I/O**: The crate is pure computation over value types.
//!    Persistence, transport, and rendering are host concerns; the wire
//!    shape they exchange is [`RangeRecord`].
//!
//! ## Modules
//!
//! - `action`: the fixed action vocabulary, weighted mixtures, normalizer
//! - `grid`: hand-key syntax and the 169-cell grid catalog
//! - `range`: the `Range` value type, stats, validation, wire codec
//! - `paint`: UI layer stack and the layer-to-actions compiler

pub mod action;
pub mod grid;
pub mod paint;
pub mod range;

// Re-export commonly used types
pub use crate::action::{normalize_raw, renormalize, Action, ActionWeight, HandActions, RawAction};

pub use crate::grid::{enumerate_hands, rank_index, GridCell, HandKey, RANKS, TOTAL_COMBOS};

pub use crate::range::{
    compute_combo_stats, compute_stats, validate_record, ActionTable, Range, RangeRecord,
    RangeStats, ValidationError, WEIGHT_SUM_TOLERANCE,
};

pub use crate::paint::{build_paint_actions, default_layers, Layer, LAYER_COUNT};
