//! Suggest command - print the computer's move for a given position
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_board(), search_position(), report_suggestion()
//! - Level 3: place_stones()
//! - Level 4: output formatting

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use hexplay_core::{Board, GameConfig, Move, Player, SearchAgent};

use crate::{load_config, Side};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SuggestArgs {
    /// Board size
    #[arg(long)]
    pub size: Option<usize>,

    /// Red stone, repeatable
    #[arg(long = "red", value_name = "ROW,COL")]
    pub red: Vec<Move>,

    /// Blue stone, repeatable
    #[arg(long = "blue", value_name = "ROW,COL")]
    pub blue: Vec<Move>,

    /// Side to suggest a move for
    #[arg(long, value_enum, default_value = "blue")]
    pub side: Side,

    /// AI search depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Suggestion as reported to the user
#[derive(Debug, Serialize)]
struct Suggestion {
    player: Player,
    player_id: u8,
    depth: u32,
    best_move: Move,
    score: String,
    nodes: u64,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run suggest command
///
/// 1. Build the position from the stone lists
/// 2. Search it for the requested side
/// 3. Print the suggestion
pub fn run(args: SuggestArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    config.validate()?;

    let board = build_board(&args, config.board_size)?;
    let suggestion = search_position(&board, args.side.into(), &config)?;
    report_suggestion(&suggestion, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_board(args: &SuggestArgs, size: usize) -> Result<Board> {
    let mut board = Board::new(size)?;
    place_stones(&mut board, &args.red, Player::Red)?;
    place_stones(&mut board, &args.blue, Player::Blue)?;

    if let Some(winner) = board.winner() {
        bail!("{} has already connected", winner);
    }
    Ok(board)
}

fn search_position(board: &Board, player: Player, config: &GameConfig) -> Result<Suggestion> {
    let mut agent = SearchAgent::new(player, config.depth, config.weights.clone());
    let best_move = agent.choose_move(board)?;

    let (score, nodes) = agent
        .last_search()
        .map(|r| (r.score.to_string(), r.nodes))
        .unwrap_or_default();

    tracing::debug!("Suggested {} for {} after {} nodes", best_move, player, nodes);

    Ok(Suggestion {
        player,
        player_id: player.id(),
        depth: config.depth,
        best_move,
        score,
        nodes,
    })
}

fn report_suggestion(suggestion: &Suggestion, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestion)?);
    } else {
        println!("{}", format_suggestion(suggestion));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn place_stones(board: &mut Board, stones: &[Move], player: Player) -> Result<()> {
    for &mv in stones {
        if !board.place(mv.row, mv.col, player)? {
            bail!("Cell {} is listed twice", mv);
        }
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_suggestion(s: &Suggestion) -> String {
    format!(
        "{} should play {} {} (score {}, depth {}, {} nodes)",
        s.player, s.best_move.row, s.best_move.col, s.score, s.depth, s.nodes
    )
}

// ============================================================================
// TESTS
// ============================================================================
