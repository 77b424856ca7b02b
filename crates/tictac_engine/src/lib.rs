//! Tic-tac-toe game engine.
//!
//! Pure, synchronous game logic for a single session: a 3x3 board, turn
//! order, win and draw detection, session scores, mode/difficulty/theme
//! settings, and a computer opponent that answers inline.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the session and is the only writer.
//! - **Rules**: pure board evaluation shared by the engine and the opponent.
//! - **Opponent**: Easy / Medium / Hard move selection.
//! - **Snapshots**: every mutation publishes one [`Snapshot`] to subscribers.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Difficulty, GameEngine, GameMode, GameStatus, Player, Position};
//!
//! let mut engine = GameEngine::with_seed(7);
//! engine.set_mode(GameMode::PlayerVsAi);
//! engine.set_difficulty(Difficulty::Hard);
//!
//! // X takes a corner; Hard answers with the center in the same call.
//! engine.place_mark(0, 0);
//! assert_eq!(engine.last_move().map(|m| m.position), Some(Position::Center));
//! assert_eq!(engine.status(), GameStatus::Turn(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod error;
pub mod invariants;
mod opponent;
mod position;
pub mod rules;
mod scores;
mod settings;
mod snapshot;
mod status;
mod types;

// Crate-level exports - Board and moves
pub use action::{Move, MoveError};
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use scores::Scores;
pub use snapshot::{Snapshot, SubscriptionId};
pub use status::GameStatus;

// Crate-level exports - Opponent
pub use opponent::{Opponent, find_winning_move};

// Crate-level exports - Settings and configuration
pub use config::{ConfigError, EngineConfig};
pub use error::ParseError;
pub use rules::Line;
pub use settings::{Difficulty, GameMode, Theme};
