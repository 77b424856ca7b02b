//! History consistency invariant: move history matches the board.

use super::super::{GameEngine, Player, Square};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: history alternates from X, never repeats a square, and
/// every recorded move is still on the board with no extra marks.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let board = engine.board();

        let alternating = history.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mv.player == expected
        });

        let distinct = history
            .iter()
            .map(|mv| mv.position)
            .collect::<HashSet<_>>()
            .len()
            == history.len();

        let on_board = history
            .iter()
            .all(|mv| board.get(mv.position) == Square::Occupied(mv.player));

        alternating && distinct && on_board && board.filled() == history.len()
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}
