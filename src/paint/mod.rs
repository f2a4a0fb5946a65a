//! Layer stack and the layer-to-actions compiler.

pub mod layer;

pub use layer::{build_paint_actions, default_layers, Layer, LAYER_COUNT};
