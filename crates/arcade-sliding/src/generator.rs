//! Scrambled board generation.

use arcade_core::PuzzleSeed;
use rand::RngExt as _;
use serde::{Deserialize, Serialize};

use crate::{Board, SlideMove, SlidingDifficulty};

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingConfig {
    /// Number of random legal moves applied to the solved board.
    pub scramble_moves: u32,
}

impl Default for SlidingConfig {
    fn default() -> Self {
        Self {
            scramble_moves: 1000,
        }
    }
}

impl SlidingConfig {
    /// Sets the number of scramble moves.
    #[must_use]
    pub fn scramble_moves(mut self, scramble_moves: u32) -> Self {
        self.scramble_moves = scramble_moves;
        self
    }
}

/// A generated board together with the scramble that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledBoard {
    /// The scrambled board.
    pub board: Board,
    /// The moves applied to the solved board, in order.
    pub scramble: Vec<SlideMove>,
    /// The seed the board was generated from.
    pub seed: PuzzleSeed,
}

impl ScrambledBoard {
    /// Returns the inverse of the scramble: a legal move sequence that solves the board.
    ///
    /// Before the `i`-th scramble move the empty cell sat where the previous move's
    /// tile came from (or in the last cell for the first move), so sliding that cell
    /// back undoes the move.
    #[must_use]
    pub fn solution(&self) -> Vec<SlideMove> {
        let last = self.board.len() - 1;
        (0..self.scramble.len())
            .rev()
            .map(|i| {
                let empty_before = if i == 0 {
                    last
                } else {
                    self.scramble[i - 1].tile
                };
                SlideMove::new(empty_before)
            })
            .collect()
    }
}

/// Produces scrambled boards that are solvable by construction.
///
/// Boards are built by walking the empty cell randomly from the solved
/// arrangement. Every step is a legal, reversible move, so the solved board is
/// always reachable.
///
/// # Examples
///
/// ```
/// use arcade_core::PuzzleSeed;
/// use arcade_sliding::{SlidingConfig, SlidingDifficulty, SlidingGenerator, apply_move};
///
/// let generator = SlidingGenerator::new(SlidingConfig::default());
/// let scrambled =
///     generator.generate_with_seed(SlidingDifficulty::Medium, PuzzleSeed::from_u64(3));
/// assert_eq!(scrambled.board.size(), 4);
/// assert!(!scrambled.board.is_solved());
///
/// let mut board = scrambled.board.clone();
/// for mv in scrambled.solution() {
///     board = apply_move(&board, mv).unwrap().state;
/// }
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlidingGenerator {
    config: SlidingConfig,
}

impl SlidingGenerator {
    /// Creates a generator with the given settings.
    #[must_use]
    pub fn new(config: SlidingConfig) -> Self {
        Self { config }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &SlidingConfig {
        &self.config
    }

    /// Generates a board from a random seed.
    #[must_use]
    pub fn generate(&self, difficulty: SlidingDifficulty) -> ScrambledBoard {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a board reproducibly from `seed`.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        difficulty: SlidingDifficulty,
        seed: PuzzleSeed,
    ) -> ScrambledBoard {
        let mut rng = seed.rng();
        let mut board = Board::solved(difficulty.size());
        let mut scramble = Vec::with_capacity(self.config.scramble_moves as usize);

        let mut step = |board: &mut Board, scramble: &mut Vec<SlideMove>| {
            let movable = board.movable_tiles();
            let tile = movable[rng.random_range(0..movable.len())];
            board.slide_unchecked(tile);
            scramble.push(SlideMove::new(tile));
        };

        for _ in 0..self.config.scramble_moves {
            step(&mut board, &mut scramble);
        }
        let mut extra = 0;
        while board.is_solved() {
            step(&mut board, &mut scramble);
            extra += 1;
        }
        if extra > 0 {
            log::debug!("scramble returned to the solved board; applied {extra} extra moves");
        }
        board.assert_invariants();

        ScrambledBoard {
            board,
            scramble,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::apply_move;

    #[test]
    fn test_generation_is_reproducible() {
        let generator = SlidingGenerator::default();
        let seed = PuzzleSeed::from_u64(42);
        let a = generator.generate_with_seed(SlidingDifficulty::Hard, seed);
        let b = generator.generate_with_seed(SlidingDifficulty::Hard, seed);
        assert_eq!(a, b);
        assert_eq!(a.board.size(), 5);
        assert_eq!(a.scramble.len(), 1000);
    }

    #[test]
    fn test_zero_scramble_still_not_solved() {
        let generator = SlidingGenerator::new(SlidingConfig::default().scramble_moves(0));
        for n in 0..20 {
            let scrambled =
                generator.generate_with_seed(SlidingDifficulty::Easy, PuzzleSeed::from_u64(n));
            assert!(!scrambled.board.is_solved());
            assert_eq!(scrambled.scramble.len(), 1);
        }
    }

    #[test]
    fn test_even_scramble_never_pre_solved() {
        // Two moves can undo each other; the generator must notice and keep going.
        let generator = SlidingGenerator::new(SlidingConfig::default().scramble_moves(2));
        for n in 0..50 {
            let scrambled =
                generator.generate_with_seed(SlidingDifficulty::Easy, PuzzleSeed::from_u64(n));
            assert!(!scrambled.board.is_solved());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_inverse_scramble_solves_board(
            n in any::<u64>(),
            difficulty in prop_oneof![
                Just(SlidingDifficulty::Easy),
                Just(SlidingDifficulty::Medium),
                Just(SlidingDifficulty::Hard),
                Just(SlidingDifficulty::Expert)
            ],
            scramble_moves in 0_u32..300
        ) {
            let config = SlidingConfig::default().scramble_moves(scramble_moves);
            let generator = SlidingGenerator::new(config);
            let scrambled = generator.generate_with_seed(difficulty, PuzzleSeed::from_u64(n));
            prop_assert!(!scrambled.board.is_solved());
            prop_assert!(scrambled.board.is_solvable());

            let mut board = scrambled.board.clone();
            for mv in scrambled.solution() {
                board = apply_move(&board, mv).unwrap().state;
            }
            prop_assert!(board.is_solved());
        }
    }
}
