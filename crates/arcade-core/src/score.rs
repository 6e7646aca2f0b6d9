//! Bounded score computation and table-driven ratings.
//!
//! Every game scores a finished session with the same shape:
//!
//! ```text
//! score = clamp(multiplier × (base + Σ bonuses − Σ penalties), floor, ceiling)
//! ```
//!
//! Bonuses and penalties are unsigned, so each term is already clamped at zero
//! before it enters the sum. Games only provide constant tables and the values of
//! their terms; the arithmetic lives in [`compute_bounded_score`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A difficulty multiplier stored in fixed point (thousandths).
///
/// Using integers keeps scores exactly reproducible; the scaled value is floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The neutral multiplier (×1).
    pub const ONE: Self = Self(1000);

    /// Creates a multiplier from thousandths, e.g. `1500` for ×1.5.
    #[must_use]
    pub const fn from_permille(permille: u32) -> Self {
        Self(permille)
    }

    /// Returns the multiplier in thousandths.
    #[must_use]
    pub const fn permille(self) -> u32 {
        self.0
    }

    /// Scales `value`, rounding toward negative infinity.
    #[must_use]
    pub fn scale(self, value: i64) -> i64 {
        (value * i64::from(self.0)).div_euclid(1000)
    }

    /// Removes the multiplier from a scaled value.
    ///
    /// A zero multiplier leaves the value unchanged.
    #[must_use]
    pub fn normalize(self, value: u32) -> u32 {
        if self.0 == 0 {
            return value;
        }
        let normalized = u64::from(value) * 1000 / u64::from(self.0);
        u32::try_from(normalized).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            write!(f, "×{whole}")
        } else {
            let frac = format!("{frac:03}");
            write!(f, "×{whole}.{}", frac.trim_end_matches('0'))
        }
    }
}

/// The terms of one bounded score computation.
///
/// # Examples
///
/// ```
/// use arcade_core::{Multiplier, ScoreTerms, compute_bounded_score};
///
/// // 1000 + 3000 − 50 − 50, doubled.
/// let terms = ScoreTerms::new(1000)
///     .bonus(3000)
///     .penalty(50)
///     .penalty(50)
///     .multiplier(Multiplier::from_permille(2000))
///     .floor(50);
/// assert_eq!(compute_bounded_score(&terms), 7800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTerms {
    base: u32,
    bonuses: Vec<u32>,
    penalties: Vec<u32>,
    multiplier: Multiplier,
    floor: u32,
    ceiling: Option<u32>,
}

impl ScoreTerms {
    /// Starts a computation from a base score, with multiplier ×1, floor 0 and no ceiling.
    #[must_use]
    pub fn new(base: u32) -> Self {
        Self {
            base,
            bonuses: Vec::new(),
            penalties: Vec::new(),
            multiplier: Multiplier::ONE,
            floor: 0,
            ceiling: None,
        }
    }

    /// Adds a bonus term.
    #[must_use]
    pub fn bonus(mut self, value: u32) -> Self {
        self.bonuses.push(value);
        self
    }

    /// Adds a bonus term only when `condition` holds.
    #[must_use]
    pub fn bonus_if(self, condition: bool, value: u32) -> Self {
        if condition { self.bonus(value) } else { self }
    }

    /// Adds a penalty term.
    #[must_use]
    pub fn penalty(mut self, value: u32) -> Self {
        self.penalties.push(value);
        self
    }

    /// Sets the multiplier applied to the sum of all terms.
    #[must_use]
    pub fn multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the minimum score.
    #[must_use]
    pub fn floor(mut self, floor: u32) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the maximum score.
    #[must_use]
    pub fn ceiling(mut self, ceiling: u32) -> Self {
        self.ceiling = Some(ceiling);
        self
    }
}

/// Computes `clamp(multiplier × (base + Σ bonuses − Σ penalties), floor, ceiling)`.
#[must_use]
pub fn compute_bounded_score(terms: &ScoreTerms) -> u32 {
    let bonuses: i64 = terms.bonuses.iter().copied().map(i64::from).sum();
    let penalties: i64 = terms.penalties.iter().copied().map(i64::from).sum();
    let subtotal = i64::from(terms.base) + bonuses - penalties;
    let mut score = terms.multiplier.scale(subtotal).max(i64::from(terms.floor));
    if let Some(ceiling) = terms.ceiling {
        score = score.min(i64::from(ceiling));
    }
    u32::try_from(score).unwrap_or(u32::MAX)
}

/// Qualitative rating attached to a score, from lowest to highest.
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
)]
pub enum Rating {
    /// Lowest rating; also used for unfinished sessions.
    Beginner,
    /// Second rating.
    Novice,
    /// Third rating.
    Intermediate,
    /// Fourth rating.
    Advanced,
    /// Fifth rating.
    Expert,
    /// Highest rating.
    Master,
}

impl Rating {
    /// All ratings in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
        Self::Master,
    ];

    /// Returns the rating's label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monotone step function from normalized scores to ratings.
///
/// Each entry is `(minimum normalized score, rating)`; entries must be sorted by
/// ascending threshold and rating, and the first threshold should be `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTable(&'static [(u32, Rating)]);

impl RatingTable {
    /// Creates a table from sorted `(threshold, rating)` steps.
    #[must_use]
    pub const fn new(steps: &'static [(u32, Rating)]) -> Self {
        Self(steps)
    }

    /// Returns the steps of the table.
    #[must_use]
    pub const fn steps(&self) -> &'static [(u32, Rating)] {
        self.0
    }

    /// Returns the highest rating whose threshold is reached.
    #[must_use]
    pub fn rate(&self, normalized: u32) -> Rating {
        self.0
            .iter()
            .take_while(|(threshold, _)| *threshold <= normalized)
            .last()
            .map_or(Rating::Beginner, |(_, rating)| *rating)
    }

    /// Returns `true` if thresholds and ratings both strictly increase.
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1)
    }
}

/// The final, immutable score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    score: u32,
    rating: Rating,
}

impl ScoreResult {
    /// The result of a session that never completed: score `0`, lowest rating.
    pub const INCOMPLETE: Self = Self {
        score: 0,
        rating: Rating::Beginner,
    };

    /// Computes the score for `terms` and rates it against `table`.
    ///
    /// The rating uses the score with the difficulty multiplier divided out, so
    /// harder tiers do not inflate ratings.
    #[must_use]
    pub fn evaluate(terms: &ScoreTerms, table: &RatingTable) -> Self {
        let score = compute_bounded_score(terms);
        let rating = table.rate(terms.multiplier.normalize(score));
        Self { score, rating }
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const TABLE: RatingTable = RatingTable::new(&[
        (0, Rating::Beginner),
        (500, Rating::Novice),
        (1000, Rating::Expert),
    ]);

    #[test]
    fn test_multiplier_scale_floors() {
        assert_eq!(Multiplier::from_permille(1500).scale(1821), 2731);
        assert_eq!(Multiplier::from_permille(1200).scale(1001), 1201);
        assert_eq!(Multiplier::from_permille(1500).scale(-3), -5);
        assert_eq!(Multiplier::ONE.scale(42), 42);
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::ONE.to_string(), "×1");
        assert_eq!(Multiplier::from_permille(1500).to_string(), "×1.5");
        assert_eq!(Multiplier::from_permille(1250).to_string(), "×1.25");
    }

    #[test]
    fn test_floor_and_ceiling() {
        let terms = ScoreTerms::new(100).penalty(5000).floor(50);
        assert_eq!(compute_bounded_score(&terms), 50);

        let terms = ScoreTerms::new(100).bonus(5000).ceiling(100);
        assert_eq!(compute_bounded_score(&terms), 100);
    }

    #[test]
    fn test_bonus_if() {
        let terms = ScoreTerms::new(0).bonus_if(true, 10).bonus_if(false, 20);
        assert_eq!(compute_bounded_score(&terms), 10);
    }

    #[test]
    fn test_rating_table() {
        assert!(TABLE.is_monotone());
        assert_eq!(TABLE.rate(0), Rating::Beginner);
        assert_eq!(TABLE.rate(499), Rating::Beginner);
        assert_eq!(TABLE.rate(500), Rating::Novice);
        assert_eq!(TABLE.rate(5000), Rating::Expert);
    }

    #[test]
    fn test_evaluate_normalizes_rating() {
        let terms = ScoreTerms::new(600).multiplier(Multiplier::from_permille(2000));
        let result = ScoreResult::evaluate(&terms, &TABLE);
        assert_eq!(result.score(), 1200);
        assert_eq!(result.rating(), Rating::Novice);
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(ScoreResult::INCOMPLETE.score(), 0);
        assert_eq!(ScoreResult::INCOMPLETE.rating(), Rating::Beginner);
        assert_eq!(Rating::Master.as_str(), "Master");
        assert_eq!(Rating::Novice.to_string(), "Novice");
    }

    proptest! {
        #[test]
        fn prop_penalties_never_raise_score(
            base in 0_u32..5000,
            bonus in 0_u32..5000,
            penalty in 0_u32..5000,
            extra in 0_u32..5000,
            permille in 500_u32..3000
        ) {
            let terms = ScoreTerms::new(base)
                .bonus(bonus)
                .penalty(penalty)
                .multiplier(Multiplier::from_permille(permille))
                .floor(50);
            let worse = terms.clone().penalty(extra);
            prop_assert!(compute_bounded_score(&worse) <= compute_bounded_score(&terms));
            prop_assert!(compute_bounded_score(&worse) >= 50);
        }
    }
}
