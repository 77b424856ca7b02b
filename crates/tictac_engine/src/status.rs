//! Derived game status.

use super::rules::Line;
use super::Player;
use serde::{Deserialize, Serialize};

/// Where the current game stands.
///
/// Never stored on its own; the engine derives it from the board,
/// the move history and the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `Player` is to move.
    Turn(Player),
    /// Game ended with `winner` completing `line`.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line, in board order.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Turn(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Turn(player) => write!(f, "Player {}'s Turn", player),
            GameStatus::Won { winner, .. } => write!(f, "Player {} Wins!", winner),
            GameStatus::Draw => write!(f, "It's a Draw!"),
        }
    }
}
