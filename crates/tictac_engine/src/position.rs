//! Board coordinates for tic-tac-toe moves.

use super::error::ParseError;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Positions are addressed either by `(row, col)` with both in `0..3`
/// or by row-major index `0..9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge-middle squares.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from `(row, col)`; `None` when either is out of range.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// `(row, col)` pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// True for squares on the main diagonal (row == col).
    pub fn on_main_diagonal(self) -> bool {
        self.row() == self.col()
    }

    /// True for squares on the anti-diagonal (row + col == 2).
    pub fn on_anti_diagonal(self) -> bool {
        self.row() + self.col() == 2
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl std::str::FromStr for Position {
    type Err = ParseError;

    /// Accepts `"row,col"`, a bare index `"0"`..`"8"`, or a label such as `"top-left"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<usize>();
            let col = col.trim().parse::<usize>();
            return match (row, col) {
                (Ok(row), Ok(col)) => Self::from_row_col(row, col)
                    .ok_or_else(|| ParseError::new("position", s)),
                _ => Err(ParseError::new("position", s)),
            };
        }

        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParseError::new("position", s));
        }

        let lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == lower)
            .ok_or_else(|| ParseError::new("position", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_through_index() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Position::Center.on_main_diagonal());
        assert!(Position::Center.on_anti_diagonal());
        assert!(Position::TopRight.on_anti_diagonal());
        assert!(!Position::TopRight.on_main_diagonal());
        assert!(!Position::TopCenter.on_main_diagonal());
        assert!(!Position::TopCenter.on_anti_diagonal());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1,2".parse::<Position>().ok(), Some(Position::MiddleRight));
        assert_eq!(" 2 , 0 ".parse::<Position>().ok(), Some(Position::BottomLeft));
        assert_eq!("4".parse::<Position>().ok(), Some(Position::Center));
        assert_eq!("top-left".parse::<Position>().ok(), Some(Position::TopLeft));
        assert!("3,3".parse::<Position>().is_err());
        assert!("9".parse::<Position>().is_err());
        assert!("nowhere".parse::<Position>().is_err());
    }
}
