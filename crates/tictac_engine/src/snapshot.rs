//! Immutable engine snapshots and change notification.

use super::action::Move;
use super::rules::Line;
use super::scores::Scores;
use super::settings::{Difficulty, GameMode, Theme};
use super::status::GameStatus;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Player to move, or the player who made the final move once the game is over.
    current_player: Player,
    /// Derived status.
    status: GameStatus,
    /// True once the game has been won or drawn.
    game_over: bool,
    /// Winning line, when there is one.
    winning_line: Option<Line>,
    /// The most recently placed mark.
    last_move: Option<Move>,
    /// Moves of the current game, oldest first.
    history: Vec<Move>,
    /// Session scores.
    scores: Scores,
    /// Current mode.
    mode: GameMode,
    /// Current difficulty.
    difficulty: Difficulty,
    /// Current theme.
    theme: Theme,
}

impl Snapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        board: Board,
        current_player: Player,
        status: GameStatus,
        history: Vec<Move>,
        scores: Scores,
        mode: GameMode,
        difficulty: Difficulty,
        theme: Theme,
    ) -> Self {
        Self {
            board,
            current_player,
            game_over: status.is_over(),
            winning_line: status.winning_line(),
            last_move: history.last().copied(),
            status,
            history,
            scores,
            mode,
            difficulty,
            theme,
        }
    }
}

/// Handle returned by `GameEngine::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Snapshot)>;

/// Registered observers, called in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub(crate) fn notify(&mut self, snapshot: &Snapshot) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(snapshot);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
