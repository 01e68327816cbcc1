use ndarray::Array2;

use crate::{CellKind, Coord2, GameConfig, ToNdIndex, neighbors};

pub use scan::*;

mod scan;

/// Strategy for laying out mines once the first-clicked cell is known.
pub trait MineGenerator {
    /// Produces the full server grid: mines plus derived neighbor counts.
    /// The `safe` cell is never assigned a mine.
    fn generate(self, config: GameConfig, safe: Coord2) -> Array2<CellKind>;
}

/// Derives the per-cell server truth from a mine mask: mines stay mines,
/// every other cell carries its clamped 8-neighborhood mine count.
pub(crate) fn kinds_from_mask(dim: Coord2, mines: &Array2<bool>) -> Array2<CellKind> {
    let (rows, cols) = dim;
    let mut kinds = Array2::from_elem(dim.to_nd_index(), CellKind::Count(0));
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            kinds[coords.to_nd_index()] = if mines[coords.to_nd_index()] {
                CellKind::Mine
            } else {
                let count = neighbors(coords, dim)
                    .filter(|&pos| mines[pos.to_nd_index()])
                    .count();
                CellKind::Count(count as u8)
            };
        }
    }
    kinds
}
