use crate::types::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("mines count must be in range [1, {max_mines}]")]
    InvalidMineCount { max_mines: CellCount },
    #[error("coordinates out of bounds: row must be in [0, {max_row}], col in [0, {max_col}]")]
    InvalidCoords { max_row: Coord, max_col: Coord },
    #[error("cell is already open")]
    CellAlreadyOpen,
}

pub type Result<T> = core::result::Result<T, GameError>;
