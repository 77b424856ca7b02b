//! Turn parity invariant: the player to move follows from the move count.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: while the game runs, X moves on even move counts and O on odd ones.
///
/// Once the game is over the current player stays on the player who made
/// the final move.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        if engine.is_game_over() {
            return history
                .last()
                .is_some_and(|last| last.player == engine.current_player());
        }

        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Player to move matches the number of moves played"
    }
}
