//! The contract every puzzle game implements.

use std::fmt::{Debug, Display};

use serde::{Serialize, de::DeserializeOwned};

use crate::{GameError, IllegalMove, MoveOutcome, PuzzleSeed, ScoreResult, Telemetry};

/// A state produced by applying a legal move, with the move's classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<S> {
    /// The state after the move.
    pub state: S,
    /// How the move is graded for telemetry.
    pub outcome: MoveOutcome,
}

/// Pure game rules: generation, legality, completion and scoring.
///
/// Implementors hold only configuration; every method is a pure function of its
/// arguments, so one value can serve any number of sessions.
pub trait Game: Debug + Clone + Send + Sync {
    /// The puzzle state.
    type State: Debug + Display + Clone + PartialEq + Serialize + DeserializeOwned;
    /// A player action.
    type Move: Debug + Clone + PartialEq + Serialize + DeserializeOwned;
    /// A difficulty tier.
    type Difficulty: Debug + Display + Copy + PartialEq + Serialize + DeserializeOwned;

    /// Short machine-readable game name.
    const NAME: &'static str;

    /// Generates a non-trivial initial state that is solvable by construction.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GenerationExhausted`] if the attempt budget runs out.
    fn generate(
        &self,
        difficulty: Self::Difficulty,
        seed: PuzzleSeed,
    ) -> Result<Self::State, GameError>;

    /// Checks whether `mv` may be applied to `state`.
    ///
    /// # Errors
    ///
    /// Returns the reason the move is illegal.
    fn check_move(&self, state: &Self::State, mv: &Self::Move) -> Result<(), IllegalMove>;

    /// Returns `true` if `mv` may be applied to `state`.
    fn is_legal(&self, state: &Self::State, mv: &Self::Move) -> bool {
        self.check_move(state, mv).is_ok()
    }

    /// Applies a move, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move is illegal; `state` is unchanged.
    fn apply(&self, state: &Self::State, mv: &Self::Move)
    -> Result<Applied<Self::State>, GameError>;

    /// Returns `true` if the state satisfies the win condition.
    fn is_complete(&self, state: &Self::State) -> bool;

    /// Returns `true` if the session has reached a terminal failure.
    fn is_failed(&self, _state: &Self::State, _telemetry: &Telemetry) -> bool {
        false
    }

    /// Returns a lower bound on the moves needed to solve `initial`, if defined.
    fn par_moves(&self, _initial: &Self::State) -> Option<u32> {
        None
    }

    /// Scores a session.
    ///
    /// Returns [`ScoreResult::INCOMPLETE`] unless `telemetry.completed` is set.
    fn score(&self, telemetry: &Telemetry, difficulty: Self::Difficulty) -> ScoreResult;
}
