//! Wire types exchanged with the HTTP boundary.
//!
//! The boundary layer owns routing and status-code mapping; these types only
//! fix the JSON shape of requests, the client-facing game snapshot, and the
//! error body.

use serde::{Deserialize, Serialize};

/// Wire marker for a hidden cell.
pub const HIDDEN: &str = "";
/// Wire marker for a mine revealed by a loss.
pub const MINE: &str = "X";
/// Wire marker for a mine flagged by a win reveal.
pub const MINE_MARKER: &str = "M";

/// Request payload for creating a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub width: i32,
    pub height: i32,
    pub mines_count: i32,
}

/// Request payload for opening one cell of an existing game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    pub game_id: String,
    pub row: i32,
    pub col: i32,
}

/// Client-facing snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub game_id: String,
    pub width: i32,
    pub height: i32,
    pub mines_count: i32,
    /// Row-major grid of single-character cells: [`HIDDEN`], `"0"`..`"8"`
    /// open counts, [`MINE`] or [`MINE_MARKER`].
    pub field: Vec<Vec<String>>,
    pub completed: bool,
}

/// Error body returned for any rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
