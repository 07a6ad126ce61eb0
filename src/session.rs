//! Game session management: the registry of concurrent games.

use crate::games::minesweeper::{Board, Cell, Game, GameError, GameStatus, MAX_DIMENSION};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Externally visible state of one game.
///
/// `field` holds `height` rows of `width` tokens: `" "` for an unopened
/// cell, `"0"`-`"8"` for an opened safe cell, `"X"` for a detonated mine
/// after a loss, and `"M"` for a defused mine after a win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    /// Identifier of the game this view was projected from.
    pub game_id: Uuid,
    /// Field width in cells.
    pub width: u16,
    /// Field height in cells.
    pub height: u16,
    /// Number of mines on the field.
    pub mines_count: u16,
    /// Whether the game has ended.
    pub completed: bool,
    /// Row-major grid of display tokens.
    pub field: Vec<Vec<String>>,
}

/// One game stored under its registry identifier.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: Uuid,
    /// The game state.
    pub game: Game,
}

impl GameSession {
    /// Wraps a game in a session under a freshly generated identifier.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        let id = Uuid::new_v4();
        info!(game_id = %id, "creating new game session");
        Self { id, game }
    }

    /// Projects the session into its externally visible view.
    ///
    /// Read-only: unopened cells are masked with a blank token, opened
    /// cells show their content. Mines render as detonated unless the game
    /// was won, in which case the win transition is the only way they were
    /// opened and they render as defused.
    pub fn view(&self) -> GameView {
        let board = self.game.board();
        let mine_token = if self.game.status() == GameStatus::Won {
            "M"
        } else {
            "X"
        };

        let field = (0..board.height())
            .map(|row| {
                (0..board.width())
                    .map(|col| {
                        if !self.game.is_opened(row, col) {
                            " ".to_string()
                        } else {
                            match board.cell(board.index(row, col)) {
                                Cell::Mine => mine_token.to_string(),
                                Cell::Safe(count) => count.to_string(),
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        GameView {
            game_id: self.id,
            width: board.width(),
            height: board.height(),
            mines_count: board.mines(),
            completed: self.game.completed(),
            field,
        }
    }
}

/// Process-wide store of active games.
///
/// The outer lock only guards map membership; every session carries its own
/// lock, held for the full reveal and win check, so turns on one game are
/// serialized while turns on different games proceed independently.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Mutex<HashMap<Uuid, Arc<Mutex<GameSession>>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the parameters, generates a board, and stores a new active
    /// game under a fresh identifier.
    #[instrument(skip(self))]
    pub fn create_game(
        &self,
        width: u16,
        height: u16,
        mines_count: u16,
    ) -> Result<GameView, GameError> {
        if width == 0 || height == 0 {
            warn!(width, height, "rejecting empty field");
            return Err(GameError::EmptyField);
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            warn!(width, height, "rejecting oversized field");
            return Err(GameError::FieldTooLarge);
        }
        let max_mines = width as u32 * height as u32 - 1;
        if mines_count as u32 > max_mines {
            warn!(mines_count, max_mines, "rejecting excessive mine count");
            return Err(GameError::TooManyMines { max: max_mines });
        }

        let board = Board::generate(width, height, mines_count, &mut rand::thread_rng());
        let view = self.insert_game(Game::new(board));
        info!(game_id = %view.game_id, width, height, mines_count, "created game");
        Ok(view)
    }

    /// Registers an externally constructed game and returns its initial
    /// view. Lets callers seed games with a deterministic board.
    #[instrument(skip(self, game))]
    pub fn insert_game(&self, game: Game) -> GameView {
        let session = GameSession::new(game);
        let view = session.view();
        let mut games = self.games.lock().unwrap();
        games.insert(session.id, Arc::new(Mutex::new(session)));
        view
    }

    /// Applies one turn to the identified game and returns the updated
    /// view.
    ///
    /// Fails when the game is unknown, already completed, the coordinates
    /// are out of bounds, or the cell is already opened; all checks run
    /// before the reveal mutates anything.
    #[instrument(skip(self, game_id), fields(game_id = %game_id))]
    pub fn make_turn(&self, game_id: Uuid, row: u16, col: u16) -> Result<GameView, GameError> {
        let session = {
            let games = self.games.lock().unwrap();
            games.get(&game_id).cloned().ok_or_else(|| {
                debug!(game_id = %game_id, "game not found");
                GameError::NotFound
            })?
        };

        // Per-session lock held across the checks, the reveal, and the
        // projection so concurrent turns on one game cannot interleave.
        let mut session = session.lock().unwrap();

        if session.game.completed() {
            warn!(game_id = %game_id, "turn on completed game");
            return Err(GameError::AlreadyCompleted);
        }
        if !session.game.board().contains(row, col) {
            warn!(game_id = %game_id, row, col, "turn coordinates out of bounds");
            return Err(GameError::OutOfBounds);
        }
        if session.game.is_opened(row, col) {
            warn!(game_id = %game_id, row, col, "turn on opened cell");
            return Err(GameError::AlreadyOpened);
        }

        let outcome = session.game.reveal(row, col);
        info!(
            game_id = %game_id,
            row,
            col,
            ?outcome,
            opened = session.game.opened_count(),
            "turn completed"
        );

        Ok(session.view())
    }

    /// Number of games currently stored.
    pub fn len(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    /// Whether the registry holds no games.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
