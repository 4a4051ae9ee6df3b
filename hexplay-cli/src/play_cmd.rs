//! Play command - interactive human vs computer game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_config(), play_game(), report_result()
//! - Level 3: prompt_board_size(), read_human_move(), take_ai_turn()
//! - Level 4: input validation and line reading

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use hexplay_core::{
    Agent, Board, Cell, Game, GameConfig, GameResult, Move, Player, MIN_BOARD_SIZE,
};

use crate::{load_config, Side};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board size (asked for interactively when omitted)
    #[arg(long)]
    pub size: Option<usize>,

    /// AI search depth
    #[arg(long)]
    pub depth: Option<u32>,

    /// Side the computer plays
    #[arg(long, value_enum)]
    pub ai_side: Option<Side>,

    /// Let the computer move first
    #[arg(long)]
    pub ai_first: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve configuration (file, flags, prompt)
/// 2. Play the game on stdin/stdout
/// 3. Announce the result
pub fn run(args: PlayArgs, config_path: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let config = resolve_config(&args, config_path, &mut input, &mut out)?;

    tracing::info!(
        "Starting game: size={}, depth={}, computer plays {}",
        config.board_size,
        config.depth,
        config.ai_player
    );

    let game = play_game(&config, &mut input, &mut out)?;
    report_result(&game, &config, &mut out)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge file config, command-line flags and the size prompt
fn resolve_config<R: BufRead, W: Write>(
    args: &PlayArgs,
    config_path: Option<&Path>,
    input: &mut R,
    out: &mut W,
) -> Result<GameConfig> {
    let mut config = load_config(config_path)?;

    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(side) = args.ai_side {
        config.ai_player = side.into();
    }
    if args.ai_first {
        config.human_first = false;
    }

    match args.size {
        Some(size) => config.board_size = size,
        None if config_path.is_none() => config.board_size = prompt_board_size(input, out)?,
        None => {}
    }

    config.validate()?;
    Ok(config)
}

/// Alternate human and computer turns until someone connects
fn play_game<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Game> {
    let mut game = Game::new(config.board_size, config.first_player())?;
    let (mut human, mut computer) = config.agents();

    writeln!(out, "\n=== Hex ===")?;
    writeln!(out, "Red connects left to right, Blue connects top to bottom.")?;
    writeln!(out, "You are {}, the computer is {}.\n", config.human_player(), config.ai_player)?;

    while game.result() == GameResult::Ongoing {
        write!(out, "{}", game.board())?;

        let player = game.current_player();
        let agent = if player == human.player() {
            &mut human
        } else {
            &mut computer
        };

        let mv = if let Agent::Human(h) = agent {
            let mv = read_human_move(game.board(), h.player, input, out)?;
            h.submit(mv);
            agent.choose_move(game.board())?
        } else {
            take_ai_turn(agent, game.board(), out)?
        };

        game.apply(mv)?;
        writeln!(out, "{} played {}", player, mv)?;
    }

    write!(out, "{}", game.board())?;
    Ok(game)
}

/// Print who won
fn report_result<W: Write>(game: &Game, config: &GameConfig, out: &mut W) -> Result<()> {
    match game.result() {
        GameResult::Won(p) if p == config.ai_player => writeln!(out, "\n{} (computer) wins.", p)?,
        GameResult::Won(p) => writeln!(out, "\n{} (you) wins. Congratulations!", p)?,
        GameResult::Ongoing => writeln!(out, "\nGame stopped.")?,
    }
    tracing::info!("Game over after {} moves: {:?}", game.history().len(), game.result());
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Ask for the board size until a usable one is given
fn prompt_board_size<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    loop {
        write!(out, "Board size (minimum {}): ", MIN_BOARD_SIZE)?;
        out.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(size) if size >= MIN_BOARD_SIZE => return Ok(size),
            Ok(_) => writeln!(out, "The board must be at least {}.", MIN_BOARD_SIZE)?,
            Err(_) => writeln!(out, "Please enter a number.")?,
        }
    }
}

/// Ask the human for a move until a legal one is given
fn read_human_move<R: BufRead, W: Write>(
    board: &Board,
    player: Player,
    input: &mut R,
    out: &mut W,
) -> Result<Move> {
    loop {
        write!(out, "{}, enter your move (row col): ", player)?;
        out.flush()?;
        let line = read_line(input)?;

        let mv = match line.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                tracing::warn!("{}", e);
                writeln!(out, "Invalid input! Enter two numbers for row and column.")?;
                continue;
            }
        };

        match check_move(board, mv) {
            Ok(()) => return Ok(mv),
            Err(reason) => {
                tracing::warn!("Rejected move {}: {}", mv, reason);
                writeln!(out, "Invalid move ({}). Try again.", reason)?;
            }
        }
    }
}

/// Let the computer pick and announce its move
fn take_ai_turn<W: Write>(agent: &mut Agent, board: &Board, out: &mut W) -> Result<Move> {
    writeln!(out, "{} (computer) is thinking...", agent.player())?;
    out.flush()?;
    agent.choose_move(board).context("Computer failed to choose a move")
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Bounds and occupancy check for human input
fn check_move(board: &Board, mv: Move) -> Result<(), String> {
    match board.cell(mv.row, mv.col) {
        Ok(Cell::Empty) => Ok(()),
        Ok(Cell::Owned(_)) => Err("cell is occupied".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed");
    }
    Ok(line)
}

// ============================================================================
// TESTS
// ============================================================================
