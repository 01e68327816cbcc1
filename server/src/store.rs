use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::RngExt;
use saper_core::{CellView, Game, GameConfig, TurnOutcome};
use saper_protocol::GameView;
use uuid::Uuid;

use crate::{Result, StoreError};

pub type GameId = String;

/// Idle time after which a session is evicted by the sweeper.
pub const DEFAULT_TTL: Duration = Duration::from_secs(120);

/// One live game with its eviction bookkeeping.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: GameId,
    game: Game,
    last_activity: Instant,
}

impl GameSession {
    fn new(id: GameId, game: Game) -> Self {
        Self {
            id,
            game,
            last_activity: Instant::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }
}

/// Concurrent registry of live games.
///
/// The outer mutex guards the id map only and is held for single lookups or
/// one retain pass; each session carries its own lock, so turns on the same
/// game are serialized while turns on different games never contend.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<GameId, Arc<Mutex<GameSession>>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Validates the requested board, registers a fresh unmined game and
    /// returns its all-hidden view.
    pub fn create_game(&self, width: i32, height: i32, mines_count: i32) -> Result<GameView> {
        let config = GameConfig::new(width, height, mines_count)?;
        let id = Uuid::new_v4().to_string();
        let seed = rand::rng().random();
        let session = GameSession::new(id.clone(), Game::new(config, seed));
        let view = render_view(&session);

        self.sessions
            .lock()
            .unwrap()
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        log::info!("created game {id} ({width}x{height}, {mines_count} mines)");
        Ok(view)
    }

    pub fn get_game(&self, id: &str) -> Result<GameView> {
        let session = self.session(id)?;
        let session = session.lock().unwrap();
        Ok(render_view(&session))
    }

    /// Applies one turn to the addressed game and refreshes its activity
    /// timestamp on success. Failed turns leave the session untouched.
    pub fn turn(&self, id: &str, row: i32, col: i32) -> Result<GameView> {
        let session = self.session(id)?;
        let mut session = session.lock().unwrap();
        let outcome = session.game.turn(row, col)?;
        session.last_activity = Instant::now();
        match outcome {
            TurnOutcome::Won => log::info!("game {id} finished: won"),
            TurnOutcome::Lost => log::info!("game {id} finished: lost"),
            TurnOutcome::Continue => {}
        }
        Ok(render_view(&session))
    }

    /// Removes every session idle for at least the configured TTL, returning
    /// how many were evicted. Surviving sessions are never mutated.
    pub fn sweep(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, session| {
            let session = session.lock().unwrap();
            now.saturating_duration_since(session.last_activity) < self.ttl
        });
        let removed = before - sessions.len();
        if removed > 0 {
            log::debug!("evicted {removed} idle game(s)");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn session(&self, id: &str) -> Result<Arc<Mutex<GameSession>>> {
        self.sessions
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Shifts a session's activity timestamp into the past to exercise
    /// eviction without real waiting.
    #[cfg(test)]
    fn backdate(&self, id: &str, by: Duration) {
        let session = self.session(id).unwrap();
        let mut session = session.lock().unwrap();
        session.last_activity -= by;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

fn render_view(session: &GameSession) -> GameView {
    let game = session.game();
    let config = game.board().config();
    let (rows, cols) = config.dim();

    let mut field = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut cells = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            cells.push(cell_marker(game.board().view_at((row, col))));
        }
        field.push(cells);
    }

    GameView {
        game_id: session.id().to_string(),
        width: i32::from(config.width),
        height: i32::from(config.height),
        mines_count: config.mines as i32,
        field,
        completed: game.status().is_finished(),
    }
}

fn cell_marker(view: CellView) -> String {
    match view {
        CellView::Hidden => saper_protocol::HIDDEN.to_string(),
        CellView::Open(n) => n.to_string(),
        CellView::Mine => saper_protocol::MINE.to_string(),
        CellView::MineMarker => saper_protocol::MINE_MARKER.to_string(),
    }
}
