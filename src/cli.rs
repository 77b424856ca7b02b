//! Command-line interface for tictac.

use clap::{Args, Parser, Subcommand};
use tictac_engine::{Difficulty, GameMode, Theme};

/// Tictac - headless driver for the tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Replay games, simulate AI matches and inspect engine snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML engine config (defaults to ./tictac.toml when present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Game mode (pvp, pvai, player-vs-player, player-vs-ai)
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// Opponent difficulty (easy, medium, hard)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Theme (modern, classic, nature)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Seed for the opponent's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a move list and print the resulting state
    Replay {
        /// Space-separated moves as "row,col", index 0-8, or label ("center")
        #[arg(long)]
        moves: String,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play random X against the computer for a number of games
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the final scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the eight winning lines in scan order
    Lines,
}
