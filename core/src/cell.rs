use serde::{Deserialize, Serialize};

/// Server-side truth for a single cell, fixed once mines are generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Pre-generation placeholder; counts as zero adjacent mines.
    Unknown,
    Mine,
    /// Number of mines in the 8-connected neighborhood, 0..=8.
    Count(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent-mine count carried by this cell, zero for the placeholder.
    pub const fn count(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Mine => 0,
            Self::Count(n) => n,
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Client-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Open(u8),
    /// Mine shown after a loss.
    Mine,
    /// Mine shown after a win, rendered distinctly from a tripped mine.
    MineMarker,
}

impl CellView {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
