//! Difficulty tiers and scoring for the sliding puzzle.

use arcade_core::{Multiplier, Rating, RatingTable, ScoreResult, ScoreTerms, Telemetry};
use serde::{Deserialize, Serialize};

const BASE_SCORE: u32 = 1000;
const MOVE_PENALTY_PER_EXTRA_MOVE: u32 = 5;
const TIME_BONUS_CAP: u32 = 500;
const TIME_BONUS_COST_PER_SEC: u32 = 2;
const PERFECT_GAME_BONUS: u32 = 500;
const SCORE_FLOOR: u32 = 50;

/// Ratings by score with the difficulty multiplier divided out.
pub const RATING_TABLE: RatingTable = RatingTable::new(&[
    (0, Rating::Beginner),
    (800, Rating::Novice),
    (1100, Rating::Intermediate),
    (1400, Rating::Advanced),
    (1700, Rating::Expert),
    (1900, Rating::Master),
]);

/// Difficulty tier; each tier has its own board size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum SlidingDifficulty {
    /// 3×3 board, ×1.
    Easy,
    /// 4×4 board, ×1.5.
    Medium,
    /// 5×5 board, ×2.
    Hard,
    /// 6×6 board, ×2.5.
    Expert,
}

impl SlidingDifficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the board side length for this tier.
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
            Self::Expert => 6,
        }
    }

    /// Returns the tier whose board has side length `size`.
    #[must_use]
    pub fn from_size(size: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.size() == size)
    }

    /// Returns the score multiplier for this tier.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Easy => Multiplier::from_permille(1000),
            Self::Medium => Multiplier::from_permille(1500),
            Self::Hard => Multiplier::from_permille(2000),
            Self::Expert => Multiplier::from_permille(2500),
        }
    }
}

/// Scores a sliding puzzle session.
///
/// `(1000 + timeBonus − movePenalty + perfectBonus) × multiplier`, floored at 50:
///
/// - `movePenalty = max(0, moves − par) × 5`
/// - `timeBonus = max(0, 500 − 2 × seconds)`
/// - `perfectBonus = 500` when the player needed no more than `par` moves
///
/// `par` is the Manhattan distance of the initial board. It is a lower bound on
/// the optimal solve, so even a shortest solution usually pays some move
/// penalty and the perfect bonus is rare. Unfinished sessions score 0.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade_core::Telemetry;
/// use arcade_sliding::{SlidingDifficulty, score};
///
/// let telemetry = Telemetry {
///     moves: 15,
///     par_moves: Some(15),
///     elapsed: Duration::from_secs(90),
///     completed: true,
///     ..Telemetry::default()
/// };
/// assert_eq!(score(&telemetry, SlidingDifficulty::Medium).score(), 2730);
/// ```
#[must_use]
pub fn score(telemetry: &Telemetry, difficulty: SlidingDifficulty) -> ScoreResult {
    if !telemetry.completed {
        return ScoreResult::INCOMPLETE;
    }
    let par = telemetry.par_moves.unwrap_or(0);
    let extra_moves = telemetry.moves.saturating_sub(par);
    let move_penalty = extra_moves.saturating_mul(MOVE_PENALTY_PER_EXTRA_MOVE);
    let time_cost = telemetry
        .elapsed_secs()
        .saturating_mul(u64::from(TIME_BONUS_COST_PER_SEC));
    let time_bonus = u32::try_from(u64::from(TIME_BONUS_CAP).saturating_sub(time_cost))
        .unwrap_or(0);
    let perfect = telemetry
        .par_moves
        .is_some_and(|par| telemetry.moves <= par);

    let terms = ScoreTerms::new(BASE_SCORE)
        .bonus(time_bonus)
        .penalty(move_penalty)
        .bonus_if(perfect, PERFECT_GAME_BONUS)
        .multiplier(difficulty.multiplier())
        .floor(SCORE_FLOOR);
    ScoreResult::evaluate(&terms, &RATING_TABLE)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;

    fn completed(moves: u32, par: u32, secs: u64) -> Telemetry {
        Telemetry {
            moves,
            par_moves: Some(par),
            elapsed: Duration::from_secs(secs),
            completed: true,
            ..Telemetry::default()
        }
    }

    #[test]
    fn test_perfect_game_example() {
        let result = score(&completed(15, 15, 90), SlidingDifficulty::Medium);
        assert_eq!(result.score(), 2730);
        // 2730 / 1.5 = 1820
        assert_eq!(result.rating(), Rating::Expert);
    }

    #[test]
    fn test_extra_moves_and_slow_time() {
        // 1000 + 0 − (40 × 5) = 800
        let result = score(&completed(60, 20, 600), SlidingDifficulty::Easy);
        assert_eq!(result.score(), 800);
        assert_eq!(result.rating(), Rating::Novice);
    }

    #[test]
    fn test_perfect_bonus_at_par() {
        // Two slides away from solved, so par is also the optimal count here.
        let board = crate::Board::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert_eq!(board.manhattan_distance(), 2);

        // Reaching par exactly earns the perfect bonus.
        let at_par = score(&completed(2, 2, 0), SlidingDifficulty::Easy);
        assert_eq!(at_par.score(), 1000 + 500 + 500);
        // One extra move loses it and costs five points.
        let over_par = score(&completed(3, 2, 0), SlidingDifficulty::Easy);
        assert_eq!(over_par.score(), 1000 + 500 - 5);
    }

    #[test]
    fn test_floor() {
        let result = score(&completed(10_000, 20, 600), SlidingDifficulty::Expert);
        assert_eq!(result.score(), 50);
        assert_eq!(result.rating(), Rating::Beginner);
    }

    #[test]
    fn test_incomplete_scores_zero() {
        let telemetry = Telemetry {
            completed: false,
            ..completed(15, 15, 10)
        };
        assert_eq!(score(&telemetry, SlidingDifficulty::Hard), ScoreResult::INCOMPLETE);
    }

    #[test]
    fn test_difficulty_tables() {
        assert!(RATING_TABLE.is_monotone());
        for tier in SlidingDifficulty::ALL {
            assert_eq!(SlidingDifficulty::from_size(tier.size()), Some(tier));
        }
        assert_eq!(SlidingDifficulty::from_size(7), None);
        assert_eq!(SlidingDifficulty::Hard.multiplier().permille(), 2000);
    }

    proptest! {
        #[test]
        fn prop_score_is_monotone(
            moves in 0_u32..2000,
            extra_moves in 0_u32..100,
            par in 0_u32..500,
            secs in 0_u64..2000,
            extra_secs in 0_u64..500,
            tier in 0_usize..4
        ) {
            let difficulty = SlidingDifficulty::ALL[tier];
            let base = score(&completed(moves, par, secs), difficulty).score();
            let more_moves = score(&completed(moves + extra_moves, par, secs), difficulty).score();
            let slower = score(&completed(moves, par, secs + extra_secs), difficulty).score();
            prop_assert!(more_moves <= base);
            prop_assert!(slower <= base);
            prop_assert!(base >= SCORE_FLOOR);
        }
    }
}
