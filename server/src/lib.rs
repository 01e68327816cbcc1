//! Session registry and TTL eviction for the Minesweeper engine.
//!
//! The store owns every live game; the HTTP boundary reaches them only
//! through [`SessionStore::create_game`], [`SessionStore::turn`] and
//! [`SessionStore::get_game`], all returning ready-to-serialize
//! [`saper_protocol::GameView`] snapshots.

pub use error::*;
pub use store::*;
pub use sweeper::*;

mod error;
mod store;
mod sweeper;
