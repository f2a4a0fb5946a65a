//! The 13x13 grid catalog.
//!
//! Enumeration is row-major and deterministic: above the diagonal suited,
//! below it offsuit, on it pairs. UIs iterate this to lay out the grid;
//! storage does not depend on the order.

use super::hand_key::{HandKey, RANKS};

/// One cell of the 13x13 grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Row index (first card rank, 0 = ace).
    pub row: usize,
    /// Column index (second card rank, 0 = ace).
    pub col: usize,
    /// Canonical key for this cell.
    pub key: HandKey,
}

/// Enumerate all 169 grid cells in row-major order.
///
/// `row == col` yields a pair, `row < col` a suited key, `row > col` an
/// offsuit key, always high-rank-first.
#[must_use]
pub fn enumerate_hands() -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(RANKS.len() * RANKS.len());
    for (row, &r1) in RANKS.iter().enumerate() {
        for (col, &r2) in RANKS.iter().enumerate() {
            let key = match row.cmp(&col) {
                std::cmp::Ordering::Less => format!("{r1}{r2}s"),
                std::cmp::Ordering::Greater => format!("{r2}{r1}o"),
                std::cmp::Ordering::Equal => format!("{r1}{r2}"),
            };
            cells.push(GridCell {
                row,
                col,
                key: HandKey::from_grid(key),
            });
        }
    }
    cells
}
