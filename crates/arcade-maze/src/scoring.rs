//! Number maze scoring.

use arcade_core::{Rating, RatingTable, ScoreResult, ScoreTerms, Telemetry};

use crate::MazeDifficulty;

const BASE_SCORE: u32 = 1000;
const MOVE_BONUS_CAP: u32 = 200;
const MOVE_BONUS_COST_PER_MOVE: u32 = 15;
const TIME_BONUS_CAP: u64 = 300;
const EFFICIENT_MOVES: u32 = 8;
const EFFICIENCY_BONUS: u32 = 150;
const QUICK_SECS: u64 = 120;
const QUICK_BONUS: u32 = 50;
const SCORE_FLOOR: u32 = 50;

/// Ratings by score with the difficulty multiplier divided out.
pub const RATING_TABLE: RatingTable = RatingTable::new(&[
    (0, Rating::Beginner),
    (1100, Rating::Novice),
    (1250, Rating::Intermediate),
    (1400, Rating::Advanced),
    (1500, Rating::Expert),
    (1600, Rating::Master),
]);

/// Scores a number maze session.
///
/// `(1000 + moveBonus + timeBonus + efficiency + quick) × multiplier`, floored at 50:
///
/// - `moveBonus = max(0, 200 − 15 × moves)`
/// - `timeBonus = max(0, 300 − seconds)`
/// - `efficiency = 150` when solved in at most 8 moves
/// - `quick = 50` when solved within 120 seconds
///
/// Unfinished sessions score 0.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade_core::Telemetry;
/// use arcade_maze::{MazeDifficulty, score};
///
/// let telemetry = Telemetry {
///     moves: 6,
///     elapsed: Duration::from_secs(100),
///     completed: true,
///     ..Telemetry::default()
/// };
/// assert_eq!(score(&telemetry, MazeDifficulty::Easy).score(), 1510);
/// ```
#[must_use]
pub fn score(telemetry: &Telemetry, difficulty: MazeDifficulty) -> ScoreResult {
    if !telemetry.completed {
        return ScoreResult::INCOMPLETE;
    }
    let secs = telemetry.elapsed_secs();
    let move_bonus =
        MOVE_BONUS_CAP.saturating_sub(telemetry.moves.saturating_mul(MOVE_BONUS_COST_PER_MOVE));
    let time_bonus = u32::try_from(TIME_BONUS_CAP.saturating_sub(secs)).unwrap_or(0);

    let terms = ScoreTerms::new(BASE_SCORE)
        .bonus(move_bonus)
        .bonus(time_bonus)
        .bonus_if(telemetry.moves <= EFFICIENT_MOVES, EFFICIENCY_BONUS)
        .bonus_if(secs <= QUICK_SECS, QUICK_BONUS)
        .multiplier(difficulty.multiplier())
        .floor(SCORE_FLOOR);
    ScoreResult::evaluate(&terms, &RATING_TABLE)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;

    fn completed(moves: u32, secs: u64) -> Telemetry {
        Telemetry {
            moves,
            elapsed: Duration::from_secs(secs),
            completed: true,
            ..Telemetry::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let result = score(&completed(6, 100), MazeDifficulty::Easy);
        assert_eq!(result.score(), 1510);
        assert_eq!(result.rating(), Rating::Expert);
    }

    #[test]
    fn test_multiplier_applies_after_bonuses() {
        // (1000 + 0 + 0) × 1.2
        let result = score(&completed(30, 900), MazeDifficulty::Medium);
        assert_eq!(result.score(), 1200);
        assert_eq!(result.rating(), Rating::Beginner);
        // (1000 + 200 + 300 + 150 + 50) × 2.5
        let result = score(&completed(0, 0), MazeDifficulty::Master);
        assert_eq!(result.score(), 4250);
        assert_eq!(result.rating(), Rating::Master);
    }

    #[test]
    fn test_incomplete_scores_zero() {
        let telemetry = Telemetry {
            completed: false,
            ..completed(6, 100)
        };
        assert_eq!(score(&telemetry, MazeDifficulty::Master), ScoreResult::INCOMPLETE);
    }

    #[test]
    fn test_rating_table_is_monotone() {
        assert!(RATING_TABLE.is_monotone());
    }

    proptest! {
        #[test]
        fn prop_score_is_monotone(
            moves in 0_u32..100,
            extra_moves in 0_u32..20,
            secs in 0_u64..1000,
            extra_secs in 0_u64..300,
            tier in 0_usize..5
        ) {
            let difficulty = MazeDifficulty::ALL[tier];
            let base = score(&completed(moves, secs), difficulty).score();
            prop_assert!(score(&completed(moves + extra_moves, secs), difficulty).score() <= base);
            prop_assert!(score(&completed(moves, secs + extra_secs), difficulty).score() <= base);
            prop_assert!(base >= SCORE_FLOOR);
        }
    }
}
