//! Plain-text rendering of engine output.

use tictac_engine::{Difficulty, Line, Scores, Snapshot};

/// Board, status, scores and settings, one block of text.
pub fn snapshot(snapshot: &Snapshot) -> String {
    let mut out = format!("{}\n\n{}\n", snapshot.board(), snapshot.status());
    if let Some(line) = snapshot.winning_line() {
        out.push_str(&format!("Winning line: {}\n", coords(line)));
    }
    out.push_str(&format!("Scores: {}\n", snapshot.scores()));
    out.push_str(&format!(
        "Mode: {} | Difficulty: {} | Theme: {}",
        snapshot.mode(),
        snapshot.difficulty(),
        snapshot.theme()
    ));
    out
}

/// Summary of a simulation run.
pub fn simulation(difficulty: Difficulty, scores: &Scores) -> String {
    let total = scores.games().max(1);
    let percent = |n: u32| f64::from(n) * 100.0 / f64::from(total);
    format!(
        "Random X vs {} O over {} games\n\
         X wins: {:>5} ({:5.1}%)\n\
         O wins: {:>5} ({:5.1}%)\n\
         Draws:  {:>5} ({:5.1}%)",
        difficulty,
        scores.games(),
        scores.x_wins(),
        percent(*scores.x_wins()),
        scores.o_wins(),
        percent(*scores.o_wins()),
        scores.draws(),
        percent(*scores.draws()),
    )
}

/// One winning line with its scan index.
pub fn line(index: usize, line: &Line) -> String {
    format!("{}: {}", index, coords(line))
}

fn coords(line: &Line) -> String {
    line.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::{GameEngine, Position};

    #[test]
    fn test_line_formats_coordinates() {
        let line = [Position::TopLeft, Position::Center, Position::BottomRight];
        assert_eq!(super::line(6, &line), "6: (0, 0) (1, 1) (2, 2)");
    }

    #[test]
    fn test_snapshot_mentions_winner() {
        let mut engine = GameEngine::with_seed(0);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.place_mark(row, col);
        }
        let text = snapshot(&engine.snapshot());
        assert!(text.contains("Player X Wins!"));
        assert!(text.contains("Winning line: (0, 0) (0, 1) (0, 2)"));
        assert!(text.contains("X 1 | O 0 | Draws 0"));
    }
}
