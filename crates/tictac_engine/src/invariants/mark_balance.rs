//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: X-count equals O-count or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
