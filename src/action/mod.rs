//! Action vocabulary, weighted mixtures, and the normalizer.

pub mod kind;
pub mod normalize;
pub mod weight;

pub use kind::Action;
pub use normalize::{normalize_raw, renormalize, RawAction};
pub use weight::{ActionWeight, HandActions};
