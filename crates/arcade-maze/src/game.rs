//! [`Game`] implementation for the number maze.

use arcade_core::{Applied, Game, GameError, IllegalMove, PuzzleSeed, ScoreResult, Telemetry};
use serde::{Deserialize, Serialize};

use crate::{MazeConfig, MazeDifficulty, MazeGenerator, MazeState, Operation, rules, scoring};

/// The number maze rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberMaze {
    config: MazeConfig,
}

impl NumberMaze {
    /// Creates the rules with the given generator settings.
    #[must_use]
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }
}

impl Game for NumberMaze {
    type State = MazeState;
    type Move = Operation;
    type Difficulty = MazeDifficulty;

    const NAME: &'static str = "number-maze";

    fn generate(
        &self,
        difficulty: MazeDifficulty,
        seed: PuzzleSeed,
    ) -> Result<MazeState, GameError> {
        MazeGenerator::new(self.config)
            .generate_with_seed(difficulty, seed)
            .map(|maze| maze.state)
    }

    fn check_move(&self, state: &MazeState, mv: &Operation) -> Result<(), IllegalMove> {
        rules::check_move(state, *mv)
    }

    fn apply(&self, state: &MazeState, mv: &Operation) -> Result<Applied<MazeState>, GameError> {
        rules::apply_move(state, *mv)
    }

    fn is_complete(&self, state: &MazeState) -> bool {
        state.is_solved()
    }

    fn score(&self, telemetry: &Telemetry, difficulty: MazeDifficulty) -> ScoreResult {
        scoring::score(telemetry, difficulty)
    }
}
