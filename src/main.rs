//! Tictac - headless driver for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use std::path::Path;
use tictac_engine::{
    Difficulty, EngineConfig, GameEngine, GameMode, Opponent, Player, Position, rules::LINES,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "tictac.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Replay {
            moves,
            settings,
            json,
        } => run_replay(&config, &settings, &moves, json),
        Command::Simulate {
            games,
            settings,
            json,
        } => run_simulate(&config, &settings, games, json),
        Command::Lines => {
            run_lines();
            Ok(())
        }
    }
}

fn initialize_tracing(verbose: bool) {
    let default = if verbose {
        "info,tictac=debug,tictac_engine=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument]
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => EngineConfig::from_file(DEFAULT_CONFIG)?,
        None => {
            debug!("No config file, using defaults");
            EngineConfig::default()
        }
    };
    Ok(config)
}

fn apply_settings(config: &EngineConfig, settings: &SettingsArgs) -> EngineConfig {
    config.clone().with_overrides(
        settings.mode,
        settings.difficulty,
        settings.theme,
        settings.seed,
    )
}

fn parse_moves(moves: &str) -> Result<Vec<Position>> {
    moves
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Position>()
                .with_context(|| format!("Bad move {:?}", token))
        })
        .collect()
}

/// Apply a move list and print the final state
#[instrument(skip(config, settings))]
fn run_replay(
    config: &EngineConfig,
    settings: &SettingsArgs,
    moves: &str,
    json: bool,
) -> Result<()> {
    let config = apply_settings(config, settings);
    let moves = parse_moves(moves)?;
    let mut engine = GameEngine::from_config(&config);

    info!(move_count = moves.len(), mode = %engine.mode(), "Replaying moves");
    for pos in moves {
        if let Err(e) = engine.check_move(pos.row(), pos.col()) {
            warn!(position = %pos, error = %e, "Move will be ignored");
        }
        engine.place_mark(pos.row(), pos.col());
    }

    let snapshot = engine.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render::snapshot(&snapshot));
    }
    Ok(())
}

/// Play random X against the configured opponent
#[instrument(skip(config, settings))]
fn run_simulate(
    config: &EngineConfig,
    settings: &SettingsArgs,
    games: u32,
    json: bool,
) -> Result<()> {
    let config = apply_settings(config, settings);
    let mut engine = GameEngine::from_config(&config);
    engine.set_mode(GameMode::PlayerVsAi);

    let mut random_x = match config.seed() {
        Some(seed) => Opponent::with_seed(Difficulty::Easy, seed.wrapping_add(1)),
        None => Opponent::new(Difficulty::Easy),
    };

    info!(games, difficulty = %engine.difficulty(), "Starting simulation");
    for game in 0..games {
        engine.reset();
        while !engine.is_game_over() {
            let Some(pos) = random_x.select_move(engine.board(), Player::X) else {
                break;
            };
            engine.place_mark(pos.row(), pos.col());
        }
        debug!(game, status = %engine.status(), "Game finished");
    }

    let scores = engine.scores();
    if json {
        println!("{}", serde_json::to_string_pretty(scores)?);
    } else {
        println!("{}", render::simulation(engine.difficulty(), scores));
    }
    Ok(())
}

/// Print the winning lines in the order the opponent scans them
fn run_lines() {
    for (i, line) in LINES.iter().enumerate() {
        println!("{}", render::line(i, line));
    }
}
