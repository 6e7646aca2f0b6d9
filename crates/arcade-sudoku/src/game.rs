//! [`Game`] implementation for sudoku.

use arcade_core::{Applied, Game, GameError, IllegalMove, PuzzleSeed, ScoreResult, Telemetry};
use serde::{Deserialize, Serialize};

use crate::{
    SudokuConfig, SudokuDifficulty, SudokuGenerator, SudokuMove, SudokuState, rules, scoring,
};

/// The sudoku rules.
///
/// A session fails once the player has made [`SudokuConfig::max_mistakes`]
/// wrong entries.
///
/// # Examples
///
/// ```
/// use arcade_core::{Game as _, PuzzleSeed, Telemetry};
/// use arcade_sudoku::{SudokuDifficulty, SudokuGame};
///
/// let game = SudokuGame::default();
/// let state = game
///     .generate(SudokuDifficulty::Easy, PuzzleSeed::from_u64(1))
///     .unwrap();
/// assert!(!game.is_complete(&state));
///
/// let telemetry = Telemetry {
///     mistakes: 3,
///     ..Telemetry::default()
/// };
/// assert!(game.is_failed(&state, &telemetry));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SudokuGame {
    config: SudokuConfig,
}

impl SudokuGame {
    /// Creates the rules with the given settings.
    #[must_use]
    pub fn new(config: SudokuConfig) -> Self {
        Self { config }
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &SudokuConfig {
        &self.config
    }
}

impl Game for SudokuGame {
    type State = SudokuState;
    type Move = SudokuMove;
    type Difficulty = SudokuDifficulty;

    const NAME: &'static str = "sudoku";

    fn generate(
        &self,
        difficulty: SudokuDifficulty,
        seed: PuzzleSeed,
    ) -> Result<SudokuState, GameError> {
        SudokuGenerator::new(self.config)
            .generate_with_seed(difficulty, seed)
            .map(|puzzle| puzzle.state())
    }

    fn check_move(&self, state: &SudokuState, mv: &SudokuMove) -> Result<(), IllegalMove> {
        rules::check_move(state, *mv)
    }

    fn apply(
        &self,
        state: &SudokuState,
        mv: &SudokuMove,
    ) -> Result<Applied<SudokuState>, GameError> {
        rules::apply_move(state, *mv)
    }

    fn is_complete(&self, state: &SudokuState) -> bool {
        state.is_solved()
    }

    fn is_failed(&self, _state: &SudokuState, telemetry: &Telemetry) -> bool {
        self.config.max_mistakes > 0 && telemetry.mistakes >= self.config.max_mistakes
    }

    fn score(&self, telemetry: &Telemetry, difficulty: SudokuDifficulty) -> ScoreResult {
        scoring::score(telemetry, difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Digit, Position,
        testing::{PUZZLE, SOLUTION, grid, state},
    };

    #[test]
    fn test_mistake_cap() {
        let state = state();
        let telemetry = |mistakes| Telemetry {
            mistakes,
            ..Telemetry::default()
        };
        let game = SudokuGame::default();
        assert!(!game.is_failed(&state, &telemetry(2)));
        assert!(game.is_failed(&state, &telemetry(3)));

        let uncapped = SudokuGame::new(SudokuConfig::default().max_mistakes(0));
        assert!(!uncapped.is_failed(&state, &telemetry(100)));
    }

    #[test]
    fn test_generated_state_has_givens() {
        let game = SudokuGame::default();
        let state = game
            .generate(SudokuDifficulty::Expert, PuzzleSeed::from_u64(5))
            .unwrap();
        assert_eq!(state.givens().len(), 81 - 58);
        assert_eq!(game.par_moves(&state), None);
        assert!(!game.is_complete(&state));
    }

    #[test]
    fn test_full_but_wrong_grid_is_not_complete() {
        let mut filled = grid(SOLUTION);
        // r1c3 is empty in the puzzle; its solution digit is 4.
        filled[Position::new(2, 0)] = Some(Digit::D9);
        let state = SudokuState::with_entries(grid(PUZZLE), grid(SOLUTION), &filled).unwrap();
        assert!(state.board().is_full());
        assert_eq!(state.completion_percent(), 100);
        assert!(!state.is_solved());
        assert!(!SudokuGame::default().is_complete(&state));
    }

    #[test]
    fn test_completion_is_idempotent() {
        let game = SudokuGame::default();
        let mut state = state();
        for pos in Position::ALL {
            if state.board()[pos].is_none() {
                assert!(!game.is_complete(&state));
                state = game.apply(&state, &SudokuMove::Hint { pos }).unwrap().state;
            }
        }
        let solved = state.clone();
        assert!(game.is_complete(&state));
        assert!(game.is_complete(&state));
        assert_eq!(state, solved);
    }
}
