//! Server-side minesweeper engine.
//!
//! # Architecture
//!
//! - **Games**: the minesweeper board generator and reveal rules
//! - **Session**: the registry of concurrent games, keyed by UUID
//! - **Server**: thin HTTP adapter (axum) over the registry
//!
//! The registry owns every session; a session owns its board and opened
//! mask. All game logic is synchronous and CPU-bound, so handlers call
//! straight into the core without suspending.
//!
//! # Example
//!
//! ```
//! use minesweeper_server::GameRegistry;
//!
//! let registry = GameRegistry::new();
//! let view = registry.create_game(8, 8, 10).unwrap();
//! assert!(!view.completed);
//! let view = registry.make_turn(view.game_id, 0, 0).unwrap();
//! assert_ne!(view.field[0][0], " ");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod games;
mod server;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - HTTP layer
pub use server::{ApiError, ErrorResponse, NewGameRequest, TurnRequest, router};

// Crate-level exports - Session management
pub use session::{GameRegistry, GameSession, GameView};

// Crate-level exports - Game types (minesweeper)
pub use games::minesweeper::{Board, Cell, Game, GameError, GameStatus, MAX_DIMENSION, RevealOutcome};
