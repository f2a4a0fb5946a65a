//! The `Range` value type, its statistics, validation, and wire codec.

pub mod model;
pub mod record;
pub mod stats;
pub mod validate;

pub use model::Range;
pub use record::RangeRecord;
pub use stats::{compute_combo_stats, compute_stats, ActionTable, RangeStats};
pub use validate::{validate_record, ValidationError, WEIGHT_SUM_TOLERANCE};
