//! Paint layers: the sidebar's action/percentage stack.
//!
//! A layer is raw UI input — an action plus an unnormalized percentage.
//! The compiler turns the fixed stack of layers into the mixture painted
//! onto a grid cell. Unlike the normalizer it neither filters against the
//! vocabulary (layers carry a typed `Action` already) nor deduplicates:
//! two layers set to the same action survive here and are merged when the
//! result passes through `Range::set_hand`.

use smallvec::SmallVec;

use crate::action::normalize::rescale_to_100;
use crate::action::{Action, ActionWeight, HandActions};

/// Size of the layer stack.
pub const LAYER_COUNT: usize = 4;

/// One paint layer: an action and a raw, unnormalized percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub action: Action,
    pub pct: f64,
}

impl Layer {
    /// Create a new layer.
    #[must_use]
    pub const fn new(action: Action, pct: f64) -> Self {
        Self { action, pct }
    }
}

/// The default layer stack: everything on the first layer.
#[must_use]
pub fn default_layers() -> [Layer; LAYER_COUNT] {
    [
        Layer::new(Action::Open, 100.0),
        Layer::new(Action::Call, 0.0),
        Layer::new(Action::Fold, 0.0),
        Layer::new(Action::Fold, 0.0),
    ]
}

/// Compile the layer stack into the mixture to paint.
///
/// Negative and non-finite percentages read as 0; zero-weight layers are
/// dropped; an all-zero stack compiles to 100% fold. Survivors get the
/// same rescale-to-100 with last-element drift correction the normalizer
/// applies.
#[must_use]
pub fn build_paint_actions(layers: &[Layer]) -> HandActions {
    let mut entries: SmallVec<[ActionWeight; 4]> = layers
        .iter()
        .map(|l| {
            let w = if l.pct.is_finite() { l.pct.max(0.0) } else { 0.0 };
            ActionWeight::new(l.action, w)
        })
        .filter(|aw| aw.weight > 0.0)
        .collect();

    if entries.is_empty() {
        return HandActions::fold();
    }
    let sum: f64 = entries.iter().map(|aw| aw.weight).sum();
    rescale_to_100(&mut entries, sum);
    HandActions(entries)
}
