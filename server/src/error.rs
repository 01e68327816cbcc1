use saper_core::GameError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The id was never issued or the session has expired; the client must
    /// create a new game.
    #[error("game {0} was never created or has expired")]
    NotFound(String),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
