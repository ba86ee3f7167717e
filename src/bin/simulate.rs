use std::error::Error;
use std::process;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use estimation::replay::play_round;
use estimation::{Game, GameMode, PLAYERS, SimOptions, random_round, render_scoreboard};

const DEFAULT_SEED: u64 = 0xE571_0A7E_5EED_F00D;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Classic,
    Mini,
    Micro,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Mini => GameMode::Mini,
            ModeArg::Micro => GameMode::Micro,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play random Estimation games and summarize the scores."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed; game `i` uses `seed + i`
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Game length
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Classic)]
    mode: ModeArg,

    /// Chance that a seat takes a dash call
    #[arg(long = "dash-chance", default_value_t = 0.1)]
    dash_chance: f64,

    /// Chance that a round is declared everyone lost
    #[arg(long = "lost-chance", default_value_t = 0.02)]
    lost_chance: f64,

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
    if args.games == 0 {
        return Err("--games must be at least 1".into());
    }
    let chances = [
        ("--dash-chance", args.dash_chance),
        ("--lost-chance", args.lost_chance),
    ];
    for (flag, chance) in chances {
        if !(0.0..=1.0).contains(&chance) {
            return Err(format!("{flag} must be between 0 and 1, got {chance}").into());
        }
    }
    let mode = GameMode::from(args.mode);
    let options = SimOptions {
        dash_chance: args.dash_chance,
        everyone_lost_chance: args.lost_chance,
        ..SimOptions::default()
    };
    info!(games = args.games, ?mode, seed = args.seed, "Starting simulation");

    let mut sums = [0i64; PLAYERS];
    let mut best = [i32::MIN; PLAYERS];
    let mut wins = [0usize; PLAYERS];
    for index in 0..args.games {
        let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(index as u64));
        let mut game = Game::builder(mode).build();
        for round in 0..mode.round_count() {
            let log = random_round(&mut rng, mode, round, options);
            play_round(&mut game, round, &log)?;
        }
        if index == 0 {
            print!("{}", render_scoreboard(&game));
            println!();
        }
        let totals = game.totals();
        debug!(game = index, ?totals, "Game finished");
        for player in 0..PLAYERS {
            sums[player] += i64::from(totals[player]);
            best[player] = best[player].max(totals[player]);
        }
        wins[game.standings()[0]] += 1;
    }

    println!("Summary over {} game(s):", args.games);
    for player in 0..PLAYERS {
        let average = sums[player] as f64 / args.games as f64;
        println!(
            "  Player {}: average {average:.1}, best {}, wins {}",
            player + 1,
            best[player],
            wins[player]
        );
    }
    Ok(())
}
