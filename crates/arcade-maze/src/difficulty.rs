//! Difficulty tiers and the generation profile of each tier.

use std::ops::RangeInclusive;

use arcade_core::Multiplier;
use serde::{Deserialize, Serialize};

use crate::OperationSet;

/// Difficulty tier of a number maze.
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
pub enum MazeDifficulty {
    /// Addition and subtraction with small operands.
    Easy,
    /// Adds multiplication.
    Medium,
    /// Adds division.
    Hard,
    /// Adds squaring.
    Expert,
    /// Every operation, negative starting values allowed.
    Master,
}

/// Parameters the generator uses for one difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Range the starting number is drawn from.
    pub start: RangeInclusive<i64>,
    /// Operation kinds enabled for the puzzle.
    pub operations: OperationSet,
    /// Operand range for addition and subtraction.
    pub additive: RangeInclusive<i64>,
    /// Operand range for multiplication and division.
    pub multiplicative: RangeInclusive<i64>,
    /// Range of the generated solution path length.
    pub path_len: RangeInclusive<usize>,
}

impl MazeDifficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Master,
    ];

    /// Returns the score multiplier for this tier.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Easy => Multiplier::from_permille(1000),
            Self::Medium => Multiplier::from_permille(1200),
            Self::Hard => Multiplier::from_permille(1500),
            Self::Expert => Multiplier::from_permille(2000),
            Self::Master => Multiplier::from_permille(2500),
        }
    }

    /// Returns the generation profile for this tier.
    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        let base = OperationSet::ADD | OperationSet::SUBTRACT;
        let (start, operations, additive, multiplicative) = match self {
            Self::Easy => (1..=20, base, 1..=9, 2..=2),
            Self::Medium => (1..=30, base | OperationSet::MULTIPLY, 1..=12, 2..=3),
            Self::Hard => (
                1..=50,
                base | OperationSet::MULTIPLY | OperationSet::DIVIDE,
                1..=20,
                2..=4,
            ),
            Self::Expert => (
                1..=75,
                base | OperationSet::MULTIPLY | OperationSet::DIVIDE | OperationSet::SQUARE,
                1..=25,
                2..=5,
            ),
            Self::Master => (-50..=100, OperationSet::all(), 1..=50, 2..=6),
        };
        DifficultyProfile {
            start,
            operations,
            additive,
            multiplicative,
            path_len: 8..=12,
        }
    }
}
