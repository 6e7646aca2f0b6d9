//! Shared vocabulary for the puzzle arcade games.
//!
//! Every game crate (sliding puzzle, number maze, sudoku) builds on the types in
//! this crate:
//!
//! - [`game`]: the [`Game`] trait tying generation, legality, completion and
//!   scoring together for one game type.
//! - [`seed`]: reproducible [`PuzzleSeed`]s and the random number generator derived
//!   from them.
//! - [`history`]: the append-only [`MoveLog`] of accepted moves.
//! - [`telemetry`]: [`Telemetry`], the scoring inputs projected from a move log.
//! - [`score`]: the generic bounded score formula and table-driven [`Rating`]s.
//! - [`error`]: [`GameError`] and [`IllegalMove`].
//!
//! # Examples
//!
//! ```
//! use arcade_core::{Multiplier, ScoreTerms, compute_bounded_score};
//!
//! let terms = ScoreTerms::new(1000)
//!     .bonus(320)
//!     .bonus(500)
//!     .multiplier(Multiplier::from_permille(1500))
//!     .floor(50);
//! assert_eq!(compute_bounded_score(&terms), 2730);
//! ```

pub mod error;
pub mod game;
pub mod history;
pub mod score;
pub mod seed;
pub mod telemetry;

pub use self::{
    error::{GameError, IllegalMove},
    game::{Applied, Game},
    history::{MoveLog, MoveLogEntry, MoveOutcome},
    score::{Multiplier, Rating, RatingTable, ScoreResult, ScoreTerms, compute_bounded_score},
    seed::{ParseSeedError, PuzzleRng, PuzzleSeed},
    telemetry::Telemetry,
};
