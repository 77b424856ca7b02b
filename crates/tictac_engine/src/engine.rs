//! The game engine: board, turn order, scores, settings and the AI reply.

use super::action::{Move, MoveError};
use super::config::EngineConfig;
use super::opponent::Opponent;
use super::rules::{self, Line};
use super::scores::Scores;
use super::settings::{Difficulty, GameMode, Theme};
use super::snapshot::{Observers, Snapshot, SubscriptionId};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe session engine.
///
/// Owns one board and the session around it. All operations run to
/// completion on the caller's thread; under [`GameMode::PlayerVsAi`] the
/// computer's reply is placed inside the same `place_mark` call that
/// handed it the turn.
///
/// Invalid moves (off the board, occupied square, finished game) are
/// ignored. Use [`GameEngine::check_move`] to learn why.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    history: Vec<Move>,
    scores: Scores,
    mode: GameMode,
    theme: Theme,
    opponent: Opponent,
    observers: Observers,
}

impl GameEngine {
    /// Creates an engine with default settings and an entropy-seeded opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opponent(
            GameMode::default(),
            Theme::default(),
            Opponent::new(Difficulty::default()),
        )
    }

    /// Creates an engine with default settings and a reproducible opponent.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_opponent(
            GameMode::default(),
            Theme::default(),
            Opponent::with_seed(Difficulty::default(), seed),
        )
    }

    /// Creates an engine from a configuration.
    #[instrument]
    pub fn from_config(config: &EngineConfig) -> Self {
        let opponent = match config.seed() {
            Some(seed) => Opponent::with_seed(*config.difficulty(), *seed),
            None => Opponent::new(*config.difficulty()),
        };
        Self::with_opponent(*config.mode(), *config.theme(), opponent)
    }

    fn with_opponent(mode: GameMode, theme: Theme, opponent: Opponent) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            history: Vec::new(),
            scores: Scores::default(),
            mode,
            theme,
            opponent,
            observers: Observers::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Does nothing if the cell is off the board or occupied, or if the
    /// game is already over. Otherwise the move is applied, the game is
    /// evaluated for a win or draw, and, if the turn passes to the
    /// computer, its reply is applied too.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, row: usize, col: usize) {
        match self.check_move(row, col) {
            Ok(pos) => self.apply(pos),
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.clear_board();
        info!("Board reset");
        self.publish();
    }

    /// Zeroes all scores and clears the board.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.clear();
        self.clear_board();
        info!("Scores reset");
        self.publish();
    }

    /// Switches game mode and starts a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.clear_board();
        info!(%mode, "Game mode changed");
        self.publish();
    }

    /// Changes opponent difficulty. The current game continues.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.opponent.set_difficulty(difficulty);
        debug!(%difficulty, "Difficulty changed");
        self.publish();
    }

    /// Changes the theme. Has no effect on play.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        debug!(%theme, "Theme changed");
        self.publish();
    }

    /// Registers `callback` to receive a snapshot after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        self.observers.add(Box::new(callback))
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the square `place_mark(row, col)` would fill, or why it would be ignored.
    pub fn check_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds(row, col))?;
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move; after the game ends, the player who moved last.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Derives the game status from the board and the last move.
    pub fn status(&self) -> GameStatus {
        if let Some(last) = self.history.last()
            && let Some(line) = rules::line_through(&self.board, last.position, last.player)
        {
            return GameStatus::Won {
                winner: last.player,
                line,
            };
        }
        if rules::is_draw(&self.board) {
            return GameStatus::Draw;
        }
        GameStatus::Turn(self.current_player)
    }

    /// True once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status().winning_line()
    }

    /// Session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current opponent difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The most recently placed mark in this game.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board.clone(),
            self.current_player,
            self.status(),
            self.history.clone(),
            self.scores,
            self.mode,
            self.difficulty(),
            self.theme,
        )
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn apply(&mut self, pos: Position) {
        let mover = self.current_player;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(Move::new(mover, pos));

        match rules::line_through(&self.board, pos, mover) {
            Some(line) => {
                self.scores.record_win(mover);
                info!(winner = %mover, ?line, scores = %self.scores, "Game won");
            }
            None if rules::is_full(&self.board) => {
                self.scores.record_draw();
                info!(scores = %self.scores, "Game drawn");
            }
            None => {
                self.current_player = mover.opponent();
            }
        }

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);
        self.publish();

        if !self.is_game_over() && self.mode.ai_player() == Some(self.current_player) {
            self.play_ai_turn();
        }
    }

    fn play_ai_turn(&mut self) {
        let mark = self.current_player;
        match self.opponent.select_move(&self.board, mark) {
            Some(pos) => self.apply(pos),
            None => warn!(%mark, "Opponent found no empty square"),
        }
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.history.clear();

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }

    #[cfg(test)]
    pub(crate) fn corrupt_board_for_test(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
