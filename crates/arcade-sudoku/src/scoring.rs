//! Sudoku scoring.

use arcade_core::{Rating, RatingTable, ScoreResult, ScoreTerms, Telemetry};

use crate::SudokuDifficulty;

const BASE_SCORE: u32 = 1000;
const TIME_BONUS_CAP: u64 = 3600;
const HINT_PENALTY: u32 = 50;
const MISTAKE_PENALTY: u32 = 25;
const SCORE_FLOOR: u32 = 50;

/// Ratings by score with the difficulty multiplier divided out.
pub const RATING_TABLE: RatingTable = RatingTable::new(&[
    (0, Rating::Beginner),
    (1500, Rating::Novice),
    (2500, Rating::Intermediate),
    (3200, Rating::Advanced),
    (3800, Rating::Expert),
    (4200, Rating::Master),
]);

/// Scores a sudoku session.
///
/// `(1000 + timeBonus − 50 × hints − 25 × mistakes) × multiplier`, floored at 50,
/// with `timeBonus = max(0, 3600 − seconds)`. Unfinished sessions score 0.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade_core::Telemetry;
/// use arcade_sudoku::{SudokuDifficulty, score};
///
/// let telemetry = Telemetry {
///     hints_used: 1,
///     mistakes: 2,
///     elapsed: Duration::from_secs(600),
///     completed: true,
///     ..Telemetry::default()
/// };
/// assert_eq!(score(&telemetry, SudokuDifficulty::Hard).score(), 7800);
/// ```
#[must_use]
pub fn score(telemetry: &Telemetry, difficulty: SudokuDifficulty) -> ScoreResult {
    if !telemetry.completed {
        return ScoreResult::INCOMPLETE;
    }
    let time_bonus =
        u32::try_from(TIME_BONUS_CAP.saturating_sub(telemetry.elapsed_secs())).unwrap_or(0);

    let terms = ScoreTerms::new(BASE_SCORE)
        .bonus(time_bonus)
        .penalty(telemetry.hints_used.saturating_mul(HINT_PENALTY))
        .penalty(telemetry.mistakes.saturating_mul(MISTAKE_PENALTY))
        .multiplier(difficulty.multiplier())
        .floor(SCORE_FLOOR);
    ScoreResult::evaluate(&terms, &RATING_TABLE)
}
