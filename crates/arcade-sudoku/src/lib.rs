//! Sudoku with soft validation, hints and a mistake cap.
//!
//! The player fills a 9×9 grid. Entries are accepted even when they clash with a
//! peer; they are graded against the stored solution instead, and the session
//! fails after too many wrong entries. A hint reveals one solution digit.
//!
//! # Overview
//!
//! - Core types: [`Digit`], [`Position`], [`DigitGrid`], [`GivenMask`] and
//!   [`CellState`].
//! - [`state`]: [`SudokuState`], the board together with its givens and solution.
//! - [`rules`]: [`SudokuMove`] legality and application.
//! - [`generator`]: [`SudokuGenerator`], which fills a grid by randomized
//!   backtracking and removes a tier-dependent number of cells.
//! - [`solver`]: the solution counter behind the optional uniqueness check.
//! - [`scoring`]: the score formula; [`game`]: [`SudokuGame`], the
//!   [`Game`](arcade_core::Game) implementation.
//!
//! # Examples
//!
//! ```
//! use arcade_core::{Game as _, PuzzleSeed};
//! use arcade_sudoku::{Position, SudokuDifficulty, SudokuGame, SudokuMove};
//!
//! let game = SudokuGame::default();
//! let mut state = game
//!     .generate(SudokuDifficulty::Easy, PuzzleSeed::from_u64(9))
//!     .unwrap();
//! for pos in Position::ALL {
//!     if state.board()[pos].is_none() {
//!         state = game.apply(&state, &SudokuMove::Hint { pos }).unwrap().state;
//!     }
//! }
//! assert!(game.is_complete(&state));
//! ```

pub mod difficulty;
pub mod digit;
pub mod game;
pub mod generator;
pub mod grid;
pub mod position;
pub mod rules;
pub mod scoring;
pub mod solver;
pub mod state;

#[cfg(test)]
mod testing;

pub use self::{
    difficulty::SudokuDifficulty,
    digit::{Digit, DigitError},
    game::SudokuGame,
    generator::{GeneratedSudoku, SudokuConfig, SudokuGenerator},
    grid::{CellState, DigitGrid, GivenMask, GivenMaskError, ParseGridError},
    position::Position,
    rules::{SudokuMove, apply_move, check_move, is_legal},
    scoring::{RATING_TABLE, score},
    solver::{count_solutions, has_unique_solution},
    state::{PuzzleError, SudokuState},
};
