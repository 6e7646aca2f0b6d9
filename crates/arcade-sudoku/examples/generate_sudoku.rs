//! Generates sudoku puzzles and prints the one with the fewest givens.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_sudoku
//! ```
//!
//! Sample many puzzles in parallel and keep the sparsest unique one:
//!
//! ```sh
//! cargo run --example generate_sudoku -- --difficulty expert --unique --samples 64
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_sudoku -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```

use std::process;

use arcade_core::PuzzleSeed;
use arcade_sudoku::{GeneratedSudoku, SudokuConfig, SudokuDifficulty, SudokuGenerator};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for SudokuDifficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Expert => Self::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier.
    #[arg(short, long, value_name = "TIER", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Only remove cells while the puzzle keeps a unique solution.
    #[arg(long)]
    unique: bool,

    /// Number of puzzles to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,

    /// Seed to reproduce (64 hex characters). Disables sampling.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let difficulty = SudokuDifficulty::from(args.difficulty);
    let config = SudokuConfig::default().require_unique(args.unique);
    let generator = SudokuGenerator::new(config);

    if let Some(seed) = args.seed {
        match generator.generate_with_seed(difficulty, seed) {
            Ok(puzzle) => print_puzzle(&puzzle, difficulty, None),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.samples)
        .into_par_iter()
        .filter_map(|_| generator.generate(difficulty).ok())
        .min_by_key(|puzzle| puzzle.problem.filled_count());

    match best {
        Some(puzzle) => print_puzzle(&puzzle, difficulty, Some(args.samples)),
        None => {
            eprintln!("Every generation attempt was exhausted.");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedSudoku, difficulty: SudokuDifficulty, samples: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!("  {difficulty}");
    if let Some(samples) = samples {
        println!("  Samples: {samples}");
    }
    println!("  Givens: {}", puzzle.problem.filled_count());
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
