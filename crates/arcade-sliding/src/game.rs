//! [`Game`] implementation for the sliding puzzle.

use arcade_core::{Applied, Game, GameError, IllegalMove, PuzzleSeed, ScoreResult, Telemetry};
use serde::{Deserialize, Serialize};

use crate::{Board, SlideMove, SlidingConfig, SlidingDifficulty, SlidingGenerator, rules, scoring};

/// The sliding puzzle rules.
///
/// # Examples
///
/// ```
/// use arcade_core::{Game as _, PuzzleSeed};
/// use arcade_sliding::{SlidingDifficulty, SlidingPuzzle};
///
/// let game = SlidingPuzzle::default();
/// let board = game
///     .generate(SlidingDifficulty::Easy, PuzzleSeed::from_u64(1))
///     .unwrap();
/// assert!(!game.is_complete(&board));
/// assert!(game.par_moves(&board).unwrap() > 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingPuzzle {
    config: SlidingConfig,
}

impl SlidingPuzzle {
    /// Creates the rules with the given generator settings.
    #[must_use]
    pub fn new(config: SlidingConfig) -> Self {
        Self { config }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &SlidingConfig {
        &self.config
    }
}

impl Game for SlidingPuzzle {
    type State = Board;
    type Move = SlideMove;
    type Difficulty = SlidingDifficulty;

    const NAME: &'static str = "sliding-puzzle";

    fn generate(
        &self,
        difficulty: SlidingDifficulty,
        seed: PuzzleSeed,
    ) -> Result<Board, GameError> {
        let scrambled = SlidingGenerator::new(self.config).generate_with_seed(difficulty, seed);
        log::debug!(
            "generated {size}x{size} sliding board with manhattan distance {distance}",
            size = scrambled.board.size(),
            distance = scrambled.board.manhattan_distance(),
        );
        Ok(scrambled.board)
    }

    fn check_move(&self, state: &Board, mv: &SlideMove) -> Result<(), IllegalMove> {
        rules::check_move(state, *mv)
    }

    fn apply(&self, state: &Board, mv: &SlideMove) -> Result<Applied<Board>, GameError> {
        rules::apply_move(state, *mv)
    }

    fn is_complete(&self, state: &Board) -> bool {
        state.is_solved()
    }

    /// The Manhattan distance of the initial board. This is a lower bound, not
    /// the optimal move count: most boards need more moves than par, and only
    /// solves that never move a tile away from home reach it.
    fn par_moves(&self, initial: &Board) -> Option<u32> {
        Some(initial.manhattan_distance())
    }

    fn score(&self, telemetry: &Telemetry, difficulty: SlidingDifficulty) -> ScoreResult {
        scoring::score(telemetry, difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_matches_generator() {
        let config = SlidingConfig::default().scramble_moves(200);
        let game = SlidingPuzzle::new(config);
        let seed = PuzzleSeed::from_u64(9);
        let board = game.generate(SlidingDifficulty::Hard, seed).unwrap();
        let expected =
            SlidingGenerator::new(config).generate_with_seed(SlidingDifficulty::Hard, seed);
        assert_eq!(board, expected.board);
    }

    #[test]
    fn test_rules_delegate() {
        let game = SlidingPuzzle::default();
        let board = Board::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(game.par_moves(&board), Some(1));
        assert!(!game.is_complete(&board));
        assert!(!game.is_legal(&board, &SlideMove::new(0)));

        let applied = game.apply(&board, &SlideMove::new(8)).unwrap();
        assert!(game.is_complete(&applied.state));
        assert_eq!(applied.outcome.correct, Some(true));
        assert!(!game.is_failed(&applied.state, &Telemetry::default()));
    }

    #[test]
    fn test_completion_is_idempotent() {
        let game = SlidingPuzzle::default();
        let solved = Board::solved(4);
        assert!(game.is_complete(&solved));
        assert!(game.is_complete(&solved));
        assert_eq!(solved, Board::solved(4));

        let moved = game.apply(&solved, &SlideMove::new(14)).unwrap().state;
        assert!(!game.is_complete(&moved));
        let back = game.apply(&moved, &SlideMove::new(15)).unwrap().state;
        assert!(game.is_complete(&back));
        assert!(game.is_complete(&back));
    }
}
