//! The number maze.
//!
//! The player starts at an integer and must reach a target integer by applying
//! arithmetic [`Operation`]s. Results are always integers: division and square
//! root round down, and every value stays within a magnitude bound. Harder tiers
//! enable more operations.
//!
//! The [`MazeGenerator`] picks a starting number and walks 8 to 12 random legal
//! steps; the walk's end becomes the target, so every maze is solvable.
//!
//! # Examples
//!
//! ```
//! use arcade_core::{Game as _, PuzzleSeed};
//! use arcade_maze::{MazeDifficulty, NumberMaze, Operation};
//!
//! let game = NumberMaze::default();
//! let state = game
//!     .generate(MazeDifficulty::Easy, PuzzleSeed::from_u64(2))
//!     .unwrap();
//! assert!(!game.is_complete(&state));
//! assert!(game.is_legal(&state, &Operation::Add(1)));
//! assert!(!game.is_legal(&state, &Operation::Square));
//! ```

pub mod difficulty;
pub mod game;
pub mod generator;
pub mod operation;
pub mod rules;
pub mod scoring;
pub mod state;

pub use self::{
    difficulty::{DifficultyProfile, MazeDifficulty},
    game::NumberMaze,
    generator::{GeneratedMaze, MazeConfig, MazeGenerator},
    operation::{Operation, OperationSet},
    rules::{apply_move, check_move, evaluate, is_legal},
    scoring::{RATING_TABLE, score},
    state::{DEFAULT_MAX_MAGNITUDE, MazeState, MazeStateError},
};
