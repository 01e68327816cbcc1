//! Server-authoritative Minesweeper engine.
//!
//! Mine placement is deferred until the first turn so the first-clicked cell
//! is always safe. The engine keeps two grids per game: the server truth
//! ([`CellKind`]) and the client-visible view ([`CellView`]) derived from it
//! by the reveal rules.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board dimensions and mine budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Validates raw wire integers into a board configuration.
    ///
    /// Requires positive dimensions and a mine budget that leaves at least
    /// one cell free for the guaranteed-safe first click.
    pub fn new(width: i32, height: i32, mines: i32) -> Result<Self> {
        let max_mines = (i64::from(width) * i64::from(height) - 1).max(0);
        let axis = 1..=i64::from(Coord::MAX);
        if !axis.contains(&i64::from(width))
            || !axis.contains(&i64::from(height))
            || !(0..=max_mines).contains(&i64::from(mines))
        {
            return Err(GameError::InvalidMineCount {
                max_mines: max_mines as CellCount,
            });
        }
        Ok(Self {
            width: width as Coord,
            height: height as Coord,
            mines: mines as CellCount,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.width, self.height)
    }

    /// Grid dimensions as `(rows, cols)`, matching `(row, col)` coordinates.
    pub const fn dim(&self) -> Coord2 {
        (self.height, self.width)
    }
}

/// Outcome of a successfully applied turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Won,
    Lost,
}

impl TurnOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
