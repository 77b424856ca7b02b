//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column or diagonal, in board order.
pub type Line = [Position; 3];

/// The 8 lines in scan order: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

const MAIN_DIAGONAL: usize = 6;
const ANTI_DIAGONAL: usize = 7;

fn owned_by(board: &Board, line: &Line, player: Player) -> bool {
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
}

/// Returns the line through `pos` completed by `player`, if any.
///
/// Only the lines that pass through `pos` are examined, in the order
/// row, column, main diagonal, anti-diagonal.
#[instrument(skip(board))]
pub fn line_through(board: &Board, pos: Position, player: Player) -> Option<Line> {
    let mut candidates = vec![LINES[pos.row()], LINES[3 + pos.col()]];
    if pos.on_main_diagonal() {
        candidates.push(LINES[MAIN_DIAGONAL]);
    }
    if pos.on_anti_diagonal() {
        candidates.push(LINES[ANTI_DIAGONAL]);
    }

    candidates
        .into_iter()
        .find(|line| owned_by(board, line, player))
}

/// Checks if there is a winner anywhere on the board.
///
/// Returns the first completed line in scan order together with its owner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let owner = board.get(line[0]).player()?;
        owned_by(board, line, owner).then_some((owner, *line))
    })
}
