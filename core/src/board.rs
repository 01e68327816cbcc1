use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{CellKind, CellView, Coord, Coord2, GameConfig, GameError, Result, ToNdIndex};

/// Two-layer board: the server truth and the client-visible view derived
/// from it. Both grids always share the configured dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    pub(crate) kinds: Array2<CellKind>,
    pub(crate) views: Array2<CellView>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        let dim = config.dim().to_nd_index();
        Self {
            config,
            kinds: Array2::default(dim),
            views: Array2::default(dim),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn kind_at(&self, coords: Coord2) -> CellKind {
        self.kinds[coords.to_nd_index()]
    }

    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.views[coords.to_nd_index()]
    }

    /// Bounds check for a turn target, reporting the valid inclusive ranges
    /// on failure.
    pub fn validate_coords(&self, row: i32, col: i32) -> Result<Coord2> {
        let (rows, cols) = self.config.dim();
        if row >= 0 && col >= 0 && row < i32::from(rows) && col < i32::from(cols) {
            Ok((row as Coord, col as Coord))
        } else {
            Err(GameError::InvalidCoords {
                max_row: rows - 1,
                max_col: cols - 1,
            })
        }
    }

    /// True until the first turn places mines: every server cell is still
    /// the pre-generation placeholder.
    pub fn is_unmined(&self) -> bool {
        self.kinds.iter().all(|&kind| kind == CellKind::Unknown)
    }

    pub(crate) fn set_kinds(&mut self, kinds: Array2<CellKind>) {
        debug_assert_eq!(kinds.dim(), self.kinds.dim());
        self.kinds = kinds;
    }

    /// Test constructor with a fixed mine layout and derived counts.
    #[cfg(test)]
    pub(crate) fn with_mines(config: GameConfig, mines: &[Coord2]) -> Self {
        let mut mask: Array2<bool> = Array2::default(config.dim().to_nd_index());
        for &coords in mines {
            mask[coords.to_nd_index()] = true;
        }
        let mut board = Self::new(config);
        board.set_kinds(crate::generator::kinds_from_mask(config.dim(), &mask));
        board
    }
}
