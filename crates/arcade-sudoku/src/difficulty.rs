//! Difficulty tiers.

use arcade_core::Multiplier;
use serde::{Deserialize, Serialize};

/// Difficulty tier of a sudoku, set by how many cells are removed.
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
pub enum SudokuDifficulty {
    /// 36 cells removed.
    Easy,
    /// 46 cells removed.
    Medium,
    /// 52 cells removed.
    Hard,
    /// 58 cells removed.
    Expert,
}

impl SudokuDifficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of cells removed from the full grid.
    #[must_use]
    pub const fn removals(self) -> usize {
        match self {
            Self::Easy => 36,
            Self::Medium => 46,
            Self::Hard => 52,
            Self::Expert => 58,
        }
    }

    /// Returns the score multiplier for this tier.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Easy => Multiplier::from_permille(1000),
            Self::Medium => Multiplier::from_permille(1500),
            Self::Hard => Multiplier::from_permille(2000),
            Self::Expert => Multiplier::from_permille(3000),
        }
    }
}
