use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use santorini_core::{
    board::FullGameState,
    engine::{TurnAction, take_turn},
    gods::GodName,
    grid::{read_board, write_board},
    heuristic::HeuristicWeights,
    player::Player,
    random_utils::{seed_from_time, seeded_rng},
};
use serde::Serialize;

/// Plays a single Santorini turn, reading the board from two grid files and writing the result back.
#[derive(Parser, Debug)]
#[command(name = "santorini")]
struct SantoriniCliArgs {
    /// Player to move: 1 or 2
    player: Player,
    /// God of the player to move (zeus, demeter, triton or an initial)
    god: GodName,
    opponent_god: GodName,
    /// Y to place workers, N to move and build
    #[arg(value_parser = parse_yes_no, action = clap::ArgAction::Set)]
    place_workers: bool,
    occupancy_file: PathBuf,
    structure_file: PathBuf,
    /// Accepted for compatibility, not read
    step_log: Option<PathBuf>,

    #[arg(short, long)]
    seed: Option<u64>,
    /// YAML file overriding heuristic weights
    #[arg(short, long)]
    weights: Option<PathBuf>,
    /// Print a JSON turn report to stdout
    #[arg(long)]
    json: bool,
    /// Print the board to stderr before and after the turn
    #[arg(short, long)]
    print: bool,
}

#[derive(Serialize, Debug)]
struct TurnReport {
    player: Player,
    god: GodName,
    opponent_god: GodName,
    seed: u64,
    action: TurnAction,
}

fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        other => Err(format!("Expected Y or N. Found: {}", other)),
    }
}

fn try_emit_message(message: &TurnReport) {
    match serde_json::to_string(message) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing message: {}", e),
    }
}

fn run(args: &SantoriniCliArgs) -> anyhow::Result<TurnReport> {
    if let Some(step_log) = &args.step_log {
        debug!("ignoring step log {:?}", step_log);
    }

    let weights = match &args.weights {
        Some(path) => HeuristicWeights::load(path)?,
        None => HeuristicWeights::default(),
    };
    let seed = args.seed.unwrap_or_else(seed_from_time);
    info!("seed {}", seed);

    let board = read_board(&args.occupancy_file, &args.structure_file)
        .context("Failed to read the board")?;
    let (p1_god, p2_god) = match args.player {
        Player::One => (args.god, args.opponent_god),
        Player::Two => (args.opponent_god, args.god),
    };
    let mut state = FullGameState::new(board, p1_god, p2_god);
    if args.print {
        state.board.print_to_console();
    }

    let mut rng = seeded_rng(seed);
    let action = take_turn(
        &mut state,
        args.player,
        args.place_workers,
        weights,
        &mut rng,
    )
    .with_context(|| format!("Player {:?} could not take a turn", args.player))?;

    write_board(&state.board, &args.occupancy_file, &args.structure_file)
        .context("Failed to write the board")?;
    if args.print {
        state.board.print_to_console();
    }

    Ok(TurnReport {
        player: args.player,
        god: args.god,
        opponent_god: args.opponent_god,
        seed,
        action,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = SantoriniCliArgs::parse();
    let report = run(&args)?;
    if args.json {
        try_emit_message(&report);
    }

    Ok(())
}
