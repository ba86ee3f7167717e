use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::info;

use estimation::{GameLog, VisualOptions, render_scoreboard_with_options, replay};

#[derive(Parser, Debug)]
#[command(
    name = "score",
    about = "Replay a recorded Estimation game and print the scoreboard."
)]
struct Args {
    /// JSON game log to replay
    log: PathBuf,

    /// Hide calls and results next to each score
    #[arg(long = "no-calls", action = ArgAction::SetTrue)]
    no_calls: bool,

    /// Print running totals after every finished round
    #[arg(long = "running", action = ArgAction::SetTrue)]
    running: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let raw = fs::read_to_string(&args.log)
        .map_err(|err| format!("failed to read {}: {err}", args.log.display()))?;
    let log: GameLog = serde_json::from_str(&raw)?;
    info!(rounds = log.rounds.len(), mode = ?log.mode, "Loaded game log");

    let game = replay(&log)?;
    let options = VisualOptions {
        show_calls: !args.no_calls,
        show_running_totals: args.running,
        ..VisualOptions::default()
    };
    print!("{}", render_scoreboard_with_options(&game, options));
    if let Some(round) = game.current_round() {
        println!("Next open round: {}", round + 1);
    } else {
        println!("Game finished.");
    }
    Ok(())
}
