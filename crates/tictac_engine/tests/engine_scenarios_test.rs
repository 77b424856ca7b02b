//! End-to-end scenarios for the game engine.

use std::cell::RefCell;
use std::rc::Rc;
use tictac_engine::{
    Board, Difficulty, EngineConfig, GameEngine, GameMode, GameStatus, Move, Player, Position,
    Snapshot, Square, Theme,
};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        engine.place_mark(row, col);
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = GameEngine::with_seed(1);
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    let status = engine.status();
    assert_eq!(status.winner(), Some(Player::X));
    let line = engine.winning_line().expect("won game has a line");
    let coords: Vec<_> = line.iter().map(|pos| pos.coords()).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);
    assert_eq!(*engine.scores().x_wins(), 1);
    assert_eq!(*engine.scores().o_wins(), 0);
}

#[test]
fn test_o_wins_column() {
    let mut engine = GameEngine::with_seed(1);
    play(&mut engine, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);

    assert_eq!(
        engine.status(),
        GameStatus::Won {
            winner: Player::O,
            line: [Position::TopCenter, Position::Center, Position::BottomCenter],
        }
    );
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(*engine.scores().o_wins(), 1);
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = GameEngine::with_seed(1);
    play(&mut engine, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);

    assert_eq!(
        engine.winning_line(),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
}

#[test]
fn test_draw_board() {
    let mut engine = GameEngine::with_seed(1);
    play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(engine.board(), &Board::from_rows(["XOX", "XOO", "OXX"]));
    assert_eq!(engine.status(), GameStatus::Draw);
    assert!(engine.winning_line().is_none());
    assert_eq!(*engine.scores().draws(), 1);
    assert_eq!(engine.scores().games(), 1);
}

#[test]
fn test_scores_accumulate_across_resets() {
    let mut engine = GameEngine::with_seed(1);
    for _ in 0..3 {
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        engine.reset();
    }
    play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(*engine.scores().x_wins(), 3);
    assert_eq!(*engine.scores().draws(), 1);

    engine.reset_scores();
    assert_eq!(engine.scores().games(), 0);
    assert_eq!(engine.status(), GameStatus::Turn(Player::X));
}

#[test]
fn test_medium_and_hard_block_open_row() {
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..10 {
            let mut engine = GameEngine::with_seed(seed);
            engine.set_mode(GameMode::PlayerVsAi);
            engine.set_difficulty(difficulty);

            engine.place_mark(0, 0);
            engine.place_mark(0, 1);

            assert_eq!(engine.board().get(Position::TopRight), Square::Occupied(Player::O));
        }
    }
}

#[test]
fn test_hard_answers_corner_with_center() {
    for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        let mut engine = GameEngine::with_seed(9);
        engine.set_mode(GameMode::PlayerVsAi);
        engine.set_difficulty(Difficulty::Hard);
        engine.place_mark(row, col);

        assert_eq!(engine.last_move(), Some(Move::new(Player::O, Position::Center)));
    }
}

#[test]
fn test_hard_takes_winning_square() {
    // X: (0,0) -> O center. X: (2,2) -> no threat, so O takes a free corner.
    let mut engine = GameEngine::with_seed(3);
    engine.set_mode(GameMode::PlayerVsAi);
    engine.set_difficulty(Difficulty::Hard);

    engine.place_mark(0, 0);
    engine.place_mark(2, 2);
    let o_second = engine.last_move().expect("AI replied").position;
    assert!(matches!(o_second, Position::TopRight | Position::BottomLeft));

    // O now threatens the anti-diagonal; X ignores it.
    let (row, col) = if o_second == Position::TopRight { (1, 0) } else { (0, 1) };
    engine.place_mark(row, col);

    assert_eq!(engine.status().winner(), Some(Player::O));
    assert_eq!(*engine.scores().o_wins(), 1);
}

#[test]
fn test_easy_ai_always_replies_on_empty_square() {
    for seed in 0..25 {
        let mut engine = GameEngine::with_seed(seed);
        engine.set_mode(GameMode::PlayerVsAi);
        engine.set_difficulty(Difficulty::Easy);

        let mut turns = 0;
        while !engine.is_game_over() {
            let pos = engine.board().empty_positions()[0];
            let before = engine.history().len();
            engine.place_mark(pos.row(), pos.col());
            assert!(engine.history().len() > before);
            turns += 1;
            assert!(turns <= 5);
        }
        assert_eq!(engine.scores().games(), 1);
    }
}

#[test]
fn test_engine_from_config() {
    let config = EngineConfig::new(GameMode::PlayerVsAi, Difficulty::Hard, Theme::Classic, Some(4));
    let mut engine = GameEngine::from_config(&config);

    assert_eq!(engine.mode(), GameMode::PlayerVsAi);
    assert_eq!(engine.difficulty(), Difficulty::Hard);
    assert_eq!(engine.theme(), Theme::Classic);

    engine.place_mark(2, 0);
    assert_eq!(engine.last_move(), Some(Move::new(Player::O, Position::Center)));
}

#[test]
fn test_snapshot_stream_tracks_every_mutation() {
    let mut engine = GameEngine::with_seed(1);
    let frames: Rc<RefCell<Vec<Snapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    engine.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    engine.place_mark(2, 2);
    engine.reset_scores();

    let frames = frames.borrow();
    assert_eq!(frames.len(), 6);

    let final_move = &frames[4];
    assert!(*final_move.game_over());
    assert_eq!(*final_move.scores().x_wins(), 1);
    assert_eq!(
        *final_move.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let cleared = &frames[5];
    assert!(!*cleared.game_over());
    assert_eq!(cleared.scores().games(), 0);
    assert_eq!(*cleared.current_player(), Player::X);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut engine = GameEngine::with_seed(1);
    engine.place_mark(1, 1);

    let json = serde_json::to_value(engine.snapshot()).expect("snapshot serializes");
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["game_over"], false);
    assert_eq!(json["mode"], "player-vs-player");
    assert_eq!(json["last_move"]["position"], "Center");
}
