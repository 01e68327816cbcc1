use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{
    Board, CellKind, CellView, Coord2, GameConfig, GameError, MineGenerator, Result, ScanGenerator,
    ToNdIndex, TurnOutcome, neighbors,
};

/// Lifecycle of a single game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created; mines are placed on the first turn.
    AwaitingFirstTurn,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::AwaitingFirstTurn
    }
}

/// A single game from creation to a terminal state.
///
/// The first turn generates the mine layout with the clicked cell as the
/// guaranteed-safe cell; later turns only reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    seed: u64,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            board: Board::new(config),
            status: GameStatus::default(),
            seed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Opens the cell at `(row, col)` and advances the game.
    ///
    /// Errors leave the game unchanged, except that an out-of-budget target
    /// on a fresh board still triggers mine placement first: the layout must
    /// exist before the already-open check can inspect the view.
    pub fn turn(&mut self, row: i32, col: i32) -> Result<TurnOutcome> {
        let coords = self.board.validate_coords(row, col)?;

        if self.board.is_unmined() {
            let kinds = ScanGenerator::new(self.seed).generate(self.board.config(), coords);
            self.board.set_kinds(kinds);
        }

        if self.board.view_at(coords).is_open() {
            return Err(GameError::CellAlreadyOpen);
        }

        if self.board.kind_at(coords).is_mine() {
            self.reveal_all(CellView::Mine);
            self.status = GameStatus::Lost;
            return Ok(TurnOutcome::Lost);
        }

        self.reveal_safe(coords);
        if self.all_safe_open() {
            self.reveal_all(CellView::MineMarker);
            self.status = GameStatus::Won;
            Ok(TurnOutcome::Won)
        } else {
            self.status = GameStatus::InProgress;
            Ok(TurnOutcome::Continue)
        }
    }

    /// Reveals a non-mine cell: numbered cells open alone, zero cells open
    /// their whole connected region plus its numbered border.
    fn reveal_safe(&mut self, coords: Coord2) {
        let count = self.board.kind_at(coords).count();
        if count > 0 {
            self.board.views[coords.to_nd_index()] = CellView::Open(count);
            return;
        }

        // Breadth-first over the zero region. A cell already shown as an
        // open zero bounds the traversal, which also caps repeat reveals of
        // the same region.
        let dim = self.board.config().dim();
        let mut visited = HashSet::from([coords]);
        let mut queue = VecDeque::from([coords]);
        while let Some(zero) = queue.pop_front() {
            self.board.views[zero.to_nd_index()] = CellView::Open(0);
            for pos in neighbors(zero, dim) {
                match self.board.kind_at(pos) {
                    CellKind::Mine => {}
                    kind if kind.count() > 0 => {
                        self.board.views[pos.to_nd_index()] = CellView::Open(kind.count());
                    }
                    _ => {
                        if self.board.view_at(pos) != CellView::Open(0) && visited.insert(pos) {
                            queue.push_back(pos);
                        }
                    }
                }
            }
        }
    }

    /// Mirrors the server truth into the client view on a terminal outcome,
    /// rendering mines as `mine_view`.
    fn reveal_all(&mut self, mine_view: CellView) {
        let (rows, cols) = self.board.config().dim();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                self.board.views[coords.to_nd_index()] = match self.board.kind_at(coords) {
                    CellKind::Mine => mine_view,
                    kind => CellView::Open(kind.count()),
                };
            }
        }
    }

    /// Win condition: no non-mine cell is left hidden.
    fn all_safe_open(&self) -> bool {
        self.board
            .kinds
            .iter()
            .zip(self.board.views.iter())
            .all(|(&kind, &view)| kind.is_mine() || view.is_open())
    }
}
