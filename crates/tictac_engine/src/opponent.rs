//! Computer opponent move selection.
//!
//! Three strategies keyed by [`Difficulty`]:
//!
//! - **Easy** picks any empty square at random.
//! - **Medium** wins if it can, blocks if it must, takes the center,
//!   and otherwise falls back to Easy.
//! - **Hard** wins, blocks, takes the center, then a random empty corner,
//!   then a random empty edge.
//!
//! Hard is a fixed heuristic, not a game-tree search, and a careful human
//! can still beat it in some lines.

use super::rules::LINES;
use super::settings::Difficulty;
use super::{Board, Player, Position, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// How a move was chosen. Used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tactic {
    Win,
    Block,
    Center,
    Corner,
    Edge,
    Random,
}

/// Returns the square that completes a line for `mark`, if one exists.
///
/// Lines are scanned rows top to bottom, columns left to right, main
/// diagonal, anti-diagonal. The first line holding exactly two `mark`
/// squares and one empty square yields its empty square.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, mark: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let own = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let mut empty = line.iter().filter(|pos| board.is_empty(**pos));
        match (own, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(*pos),
            _ => None,
        }
    })
}

/// Difficulty-parameterized move chooser with its own random source.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    rng: StdRng,
}

impl Opponent {
    /// Creates an opponent seeded from OS entropy.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a reproducible random sequence.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty; the random sequence continues.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses an empty square for `mark`. `None` only when the board is full.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn select_move(&mut self, board: &Board, mark: Player) -> Option<Position> {
        let (pos, tactic) = match self.difficulty {
            Difficulty::Easy => self.random(board)?,
            Difficulty::Medium => self
                .win_or_block(board, mark)
                .or_else(|| center(board))
                .or_else(|| self.random(board))?,
            Difficulty::Hard => self
                .win_or_block(board, mark)
                .or_else(|| center(board))
                .or_else(|| self.pick(board, &Position::CORNERS, Tactic::Corner))
                .or_else(|| self.pick(board, &Position::EDGES, Tactic::Edge))?,
        };
        debug!(position = %pos, ?tactic, "Opponent chose move");
        Some(pos)
    }

    fn win_or_block(&self, board: &Board, mark: Player) -> Option<(Position, Tactic)> {
        find_winning_move(board, mark)
            .map(|pos| (pos, Tactic::Win))
            .or_else(|| find_winning_move(board, mark.opponent()).map(|pos| (pos, Tactic::Block)))
    }

    fn random(&mut self, board: &Board) -> Option<(Position, Tactic)> {
        self.pick(board, &Position::ALL, Tactic::Random)
    }

    fn pick(
        &mut self,
        board: &Board,
        candidates: &[Position],
        tactic: Tactic,
    ) -> Option<(Position, Tactic)> {
        let open: Vec<Position> = board
            .empty_positions()
            .into_iter()
            .filter(|pos| candidates.contains(pos))
            .collect();
        open.choose(&mut self.rng).map(|pos| (*pos, tactic))
    }
}

fn center(board: &Board) -> Option<(Position, Tactic)> {
    board
        .is_empty(Position::Center)
        .then_some((Position::Center, Tactic::Center))
}
