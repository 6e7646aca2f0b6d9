//! Sudoku puzzle generation.

use arcade_core::{GameError, PuzzleSeed};
use rand::seq::SliceRandom as _;
use serde::{Deserialize, Serialize};

use crate::{DigitGrid, Position, SudokuDifficulty, SudokuState, solver};

/// Generator and rule settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SudokuConfig {
    /// Placements allowed for one backtracking fill before restarting.
    pub fill_step_budget: usize,
    /// Number of fills tried before giving up.
    pub max_attempts: usize,
    /// Only remove a cell when the puzzle keeps exactly one solution.
    ///
    /// The tier's removal count then becomes an upper bound.
    pub require_unique: bool,
    /// Mistakes that end the session; 0 disables the cap.
    pub max_mistakes: u32,
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self {
            fill_step_budget: 10_000,
            max_attempts: 20,
            require_unique: false,
            max_mistakes: 3,
        }
    }
}

impl SudokuConfig {
    /// Sets the placement budget of one fill.
    #[must_use]
    pub fn fill_step_budget(mut self, fill_step_budget: usize) -> Self {
        self.fill_step_budget = fill_step_budget;
        self
    }

    /// Sets the number of fills tried.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Enables or disables the uniqueness check.
    #[must_use]
    pub fn require_unique(mut self, require_unique: bool) -> Self {
        self.require_unique = require_unique;
        self
    }

    /// Sets the mistake cap.
    #[must_use]
    pub fn max_mistakes(mut self, max_mistakes: u32) -> Self {
        self.max_mistakes = max_mistakes;
        self
    }
}

/// A generated puzzle with its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSudoku {
    /// The puzzle: the givens alone.
    pub problem: DigitGrid,
    /// The full grid the puzzle was cut from.
    pub solution: DigitGrid,
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
}

impl GeneratedSudoku {
    /// Returns the fresh game state for this puzzle.
    #[must_use]
    pub fn state(&self) -> SudokuState {
        SudokuState::from_generated(self.problem.clone(), self.solution.clone())
    }
}

/// Produces sudoku puzzles by filling a grid and removing cells.
///
/// The full grid is a solution of the reduced puzzle, so every puzzle is
/// solvable. Uniqueness is only guaranteed with
/// [`SudokuConfig::require_unique`].
///
/// # Examples
///
/// ```
/// use arcade_core::PuzzleSeed;
/// use arcade_sudoku::{SudokuConfig, SudokuDifficulty, SudokuGenerator};
///
/// let generator = SudokuGenerator::new(SudokuConfig::default());
/// let puzzle = generator
///     .generate_with_seed(SudokuDifficulty::Medium, PuzzleSeed::from_u64(4))
///     .unwrap();
/// assert_eq!(puzzle.problem.filled_count(), 81 - 46);
/// assert!(puzzle.solution.is_valid_solution());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SudokuGenerator {
    config: SudokuConfig,
}

impl SudokuGenerator {
    /// Creates a generator with the given settings.
    #[must_use]
    pub fn new(config: SudokuConfig) -> Self {
        Self { config }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &SudokuConfig {
        &self.config
    }

    /// Generates a puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GenerationExhausted`] if every fill ran out of budget.
    pub fn generate(&self, difficulty: SudokuDifficulty) -> Result<GeneratedSudoku, GameError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle reproducibly from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GenerationExhausted`] if every fill ran out of budget.
    pub fn generate_with_seed(
        &self,
        difficulty: SudokuDifficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedSudoku, GameError> {
        for attempt in 0..self.config.max_attempts {
            let attempt_seed = if attempt == 0 {
                seed
            } else {
                seed.derive("fill", attempt as u64)
            };
            let mut rng = attempt_seed.rng();
            let Some(solution) = solver::fill_grid(&mut rng, self.config.fill_step_budget) else {
                log::debug!("sudoku fill attempt {attempt} ran out of budget");
                continue;
            };

            let mut positions = Position::ALL;
            positions.shuffle(&mut rng);
            let mut problem = solution.clone();
            let mut removed = 0;
            for pos in positions {
                if removed == difficulty.removals() {
                    break;
                }
                let digit = problem[pos].take();
                if self.config.require_unique && !solver::has_unique_solution(&problem) {
                    problem[pos] = digit;
                    continue;
                }
                removed += 1;
            }
            log::debug!(
                "generated {difficulty} sudoku with {removed} cells removed after {attempt} retries"
            );
            return Ok(GeneratedSudoku {
                problem,
                solution,
                seed,
            });
        }

        log::warn!(
            "sudoku generation exhausted after {} attempts",
            self.config.max_attempts
        );
        Err(GameError::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::SudokuMove;

    #[test]
    fn test_generation_is_reproducible() {
        let generator = SudokuGenerator::default();
        let seed = PuzzleSeed::from_u64(21);
        let a = generator.generate_with_seed(SudokuDifficulty::Hard, seed).unwrap();
        let b = generator.generate_with_seed(SudokuDifficulty::Hard, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.problem.filled_count(), 81 - 52);
    }

    #[test]
    fn test_exhausted_budget_is_an_error() {
        let config = SudokuConfig::default().fill_step_budget(40).max_attempts(3);
        let err = SudokuGenerator::new(config)
            .generate_with_seed(SudokuDifficulty::Easy, PuzzleSeed::from_u64(1))
            .unwrap_err();
        assert_eq!(err, GameError::GenerationExhausted { attempts: 3 });
    }

    #[test]
    fn test_require_unique() {
        let config = SudokuConfig::default().require_unique(true);
        let puzzle = SudokuGenerator::new(config)
            .generate_with_seed(SudokuDifficulty::Medium, PuzzleSeed::from_u64(8))
            .unwrap();
        assert!(solver::has_unique_solution(&puzzle.problem));
        assert!(puzzle.problem.filled_count() >= 81 - 46);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_solution_completes_puzzle(n in any::<u64>(), tier in 0_usize..4) {
            let difficulty = SudokuDifficulty::ALL[tier];
            let puzzle = SudokuGenerator::default()
                .generate_with_seed(difficulty, PuzzleSeed::from_u64(n))
                .unwrap();
            prop_assert!(puzzle.solution.is_valid_solution());
            prop_assert_eq!(puzzle.problem.filled_count(), 81 - difficulty.removals());

            let mut state = puzzle.state();
            prop_assert!(!state.is_solved());
            for pos in Position::ALL {
                if state.board()[pos].is_none() {
                    let digit = state.solution_digit(pos);
                    state = crate::apply_move(&state, SudokuMove::Set { pos, digit }).unwrap().state;
                }
            }
            prop_assert!(state.is_solved());
        }
    }
}
