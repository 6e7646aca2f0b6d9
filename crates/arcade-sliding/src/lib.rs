//! The sliding tile puzzle.
//!
//! An N×N board (N from 3 to 6) holds the tiles `1..N²` and one empty cell. A
//! move slides a tile orthogonally adjacent to the empty cell into it. The puzzle
//! is solved when the tiles read `1, 2, …, N²−1` in row-major order with the
//! empty cell last.
//!
//! - [`board`]: the [`Board`] and its geometry, distances and solvability parity.
//! - [`rules`]: [`SlideMove`], legality and move application.
//! - [`generator`]: [`SlidingGenerator`], which scrambles the solved board by a
//!   random walk so every generated board is solvable.
//! - [`scoring`]: [`SlidingDifficulty`] tiers and the score formula.
//! - [`game`]: [`SlidingPuzzle`], the [`Game`](arcade_core::Game) implementation.
//!
//! # Examples
//!
//! ```
//! use arcade_core::{Game as _, PuzzleSeed};
//! use arcade_sliding::{SlidingConfig, SlidingDifficulty, SlidingGenerator, SlidingPuzzle};
//!
//! let config = SlidingConfig::default().scramble_moves(40);
//! let generator = SlidingGenerator::new(config);
//! let scrambled = generator.generate_with_seed(SlidingDifficulty::Easy, PuzzleSeed::from_u64(5));
//!
//! let game = SlidingPuzzle::new(config);
//! let mut board = scrambled.board.clone();
//! for mv in scrambled.solution() {
//!     board = game.apply(&board, &mv).unwrap().state;
//! }
//! assert!(game.is_complete(&board));
//! ```

pub mod board;
pub mod game;
pub mod generator;
pub mod rules;
pub mod scoring;

pub use self::{
    board::{Board, BoardError, EMPTY, MAX_SIZE, MIN_SIZE, Neighbors},
    game::SlidingPuzzle,
    generator::{ScrambledBoard, SlidingConfig, SlidingGenerator},
    rules::{SlideMove, apply_move, check_move, is_legal},
    scoring::{RATING_TABLE, SlidingDifficulty, score},
};
