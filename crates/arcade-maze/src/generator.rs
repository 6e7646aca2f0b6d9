//! Maze generation by random walk.

use arcade_core::{GameError, PuzzleRng, PuzzleSeed};
use rand::RngExt as _;
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAX_MAGNITUDE, DifficultyProfile, MazeDifficulty, MazeState, Operation, OperationSet,
    rules,
};

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Bound on the absolute value of every number in the maze.
    pub max_magnitude: i64,
    /// Number of random walks tried before giving up.
    pub max_walk_attempts: usize,
    /// Number of operations tried for each step of a walk.
    pub max_step_attempts: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
            max_walk_attempts: 100,
            max_step_attempts: 50,
        }
    }
}

impl MazeConfig {
    /// Sets the magnitude bound.
    #[must_use]
    pub fn max_magnitude(mut self, max_magnitude: i64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    /// Sets the walk attempt budget.
    #[must_use]
    pub fn max_walk_attempts(mut self, max_walk_attempts: usize) -> Self {
        self.max_walk_attempts = max_walk_attempts;
        self
    }

    /// Sets the per-step attempt budget.
    #[must_use]
    pub fn max_step_attempts(mut self, max_step_attempts: usize) -> Self {
        self.max_step_attempts = max_step_attempts;
        self
    }
}

/// A generated maze with the walk that defines its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The maze, positioned at its start.
    pub state: MazeState,
    /// A legal operation sequence leading from `start` to `target`.
    pub path: Vec<Operation>,
    /// The seed the maze was generated from.
    pub seed: PuzzleSeed,
}

/// Produces mazes whose target is reachable by construction.
///
/// The generator draws a starting number and walks 8 to 12 random legal steps
/// with the tier's operations; the walk's final value becomes the target.
///
/// # Examples
///
/// ```
/// use arcade_core::PuzzleSeed;
/// use arcade_maze::{MazeConfig, MazeDifficulty, MazeGenerator, apply_move};
///
/// let generator = MazeGenerator::new(MazeConfig::default());
/// let maze = generator
///     .generate_with_seed(MazeDifficulty::Hard, PuzzleSeed::from_u64(7))
///     .unwrap();
///
/// let mut state = maze.state.clone();
/// for op in &maze.path {
///     state = apply_move(&state, *op).unwrap().state;
/// }
/// assert!(state.is_solved());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    /// Creates a generator with the given settings.
    #[must_use]
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generates a maze from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GenerationExhausted`] if no walk succeeds within the
    /// attempt budget.
    pub fn generate(&self, difficulty: MazeDifficulty) -> Result<GeneratedMaze, GameError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a maze reproducibly from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GenerationExhausted`] if no walk succeeds within the
    /// attempt budget.
    pub fn generate_with_seed(
        &self,
        difficulty: MazeDifficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedMaze, GameError> {
        let profile = difficulty.profile();
        let kinds = profile.operations.iter().collect::<Vec<_>>();
        let mut rng = seed.rng();

        for attempt in 0..self.config.max_walk_attempts {
            let start = rng.random_range(profile.start.clone());
            let path_len = rng.random_range(profile.path_len.clone());
            if let Some((target, path)) = self.walk(&mut rng, &profile, &kinds, start, path_len) {
                log::debug!(
                    "generated {difficulty} maze {start} → {target} in {len} steps after {retries} retries",
                    len = path.len(),
                    retries = attempt,
                );
                let witness_len = u32::try_from(path.len()).unwrap_or(u32::MAX);
                let state = MazeState::new(
                    start,
                    target,
                    profile.operations,
                    self.config.max_magnitude,
                    witness_len,
                );
                return Ok(GeneratedMaze { state, path, seed });
            }
        }

        log::warn!(
            "maze generation exhausted after {} walks",
            self.config.max_walk_attempts
        );
        Err(GameError::GenerationExhausted {
            attempts: self.config.max_walk_attempts,
        })
    }

    fn walk(
        &self,
        rng: &mut PuzzleRng,
        profile: &DifficultyProfile,
        kinds: &[OperationSet],
        start: i64,
        path_len: usize,
    ) -> Option<(i64, Vec<Operation>)> {
        if kinds.is_empty() || start.unsigned_abs() > self.config.max_magnitude.unsigned_abs() {
            return None;
        }
        let mut state = MazeState::new(
            start,
            start,
            profile.operations,
            self.config.max_magnitude,
            0,
        );
        let mut path = Vec::with_capacity(path_len);

        for _ in 0..path_len {
            let step = (0..self.config.max_step_attempts).find_map(|_| {
                let kind = kinds[rng.random_range(0..kinds.len())];
                let op = random_operation(rng, profile, kind);
                let value = rules::evaluate(&state, op).ok()?;
                (value != state.current()).then_some((op, value))
            });
            let (op, value) = step?;
            state.push(op, value);
            path.push(op);
        }

        (state.current() != start).then(|| (state.current(), path))
    }
}

fn random_operation(
    rng: &mut PuzzleRng,
    profile: &DifficultyProfile,
    kind: OperationSet,
) -> Operation {
    if kind == OperationSet::ADD {
        Operation::Add(rng.random_range(profile.additive.clone()))
    } else if kind == OperationSet::SUBTRACT {
        Operation::Subtract(rng.random_range(profile.additive.clone()))
    } else if kind == OperationSet::MULTIPLY {
        Operation::Multiply(rng.random_range(profile.multiplicative.clone()))
    } else if kind == OperationSet::DIVIDE {
        Operation::Divide(rng.random_range(profile.multiplicative.clone()))
    } else if kind == OperationSet::SQUARE {
        Operation::Square
    } else {
        Operation::SquareRoot
    }
}
