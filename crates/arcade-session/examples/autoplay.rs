//! Plays a sliding puzzle session by replaying the generator's solution.
//!
//! Prints the board, the moves taken, and the final telemetry and score.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Pick the board size and scramble length, and simulate thinking time:
//!
//! ```sh
//! cargo run --example autoplay -- --size 4 --scramble-moves 200 --secs-per-move 1
//! ```

use std::{process, time::Duration};

use arcade_core::PuzzleSeed;
use arcade_session::{ManualClock, Session, SessionConfig};
use arcade_sliding::{SlidingConfig, SlidingDifficulty, SlidingGenerator, SlidingPuzzle};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length (3-6).
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: u8,

    /// Random moves applied to the solved board.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    scramble_moves: u32,

    /// Simulated time per move, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    secs_per_move: u64,

    /// Seed to play (64 hex characters). Random when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let Some(difficulty) = SlidingDifficulty::from_size(args.size) else {
        eprintln!("--size must be between 3 and 6.");
        process::exit(2);
    };
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let config = SlidingConfig::default().scramble_moves(args.scramble_moves);
    let solution = SlidingGenerator::new(config)
        .generate_with_seed(difficulty, seed)
        .solution();

    let clock = ManualClock::new();
    let mut session = match Session::start_with_clock(
        SlidingPuzzle::new(config),
        difficulty,
        seed,
        &SessionConfig::default(),
        &clock,
    ) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Board:");
    for line in session.initial().to_string().lines() {
        println!("  {line}");
    }
    println!();

    for mv in solution {
        if session.status().is_finished() {
            break;
        }
        clock.advance(Duration::from_secs(args.secs_per_move));
        if let Err(err) = session.play(mv) {
            eprintln!("{mv} rejected: {err}");
            process::exit(1);
        }
    }

    let telemetry = session.telemetry();
    println!("Result:");
    println!("  Status: {}", session.status());
    println!("  Moves: {} (par {})", telemetry.moves, telemetry.par_moves.unwrap_or(0));
    println!("  Time: {}s", telemetry.elapsed_secs());
    match session.score() {
        Ok(score) => {
            println!("  Score: {}", score.score());
            println!("  Rating: {}", score.rating());
        }
        Err(err) => println!("  Score: unavailable ({err})"),
    }
}
