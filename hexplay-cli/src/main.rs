//! HEXPLAY CLI - Command-line interface
//!
//! Commands:
//! - play: Play Hex against the computer in the terminal
//! - suggest: Print the computer's move for a given position

mod play_cmd;
mod suggest_cmd;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hexplay_core::{GameConfig, Player};

#[derive(Parser)]
#[command(name = "hexplay")]
#[command(about = "Play Hex against an alpha-beta AI")]
struct Cli {
    /// Log search details
    #[arg(long, short, global = true)]
    verbose: bool,

    /// JSON game configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play_cmd::PlayArgs),
    /// Suggest a move for a position
    Suggest(suggest_cmd::SuggestArgs),
}

/// Side selector for command-line flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Connects left to right
    Red,
    /// Connects top to bottom
    Blue,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Player::Red,
            Side::Blue => Player::Blue,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.config.as_deref()),
        Commands::Suggest(args) => suggest_cmd::run(args, cli.config.as_deref()),
    }
}

/// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the configuration file, or defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}
