//! Move legality and application.

use std::fmt::{self, Display};

use arcade_core::{Applied, GameError, IllegalMove, MoveOutcome};
use serde::{Deserialize, Serialize};

use crate::{Digit, Position, SudokuState};

/// A player action on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SudokuMove {
    /// Writes `digit` into the cell, replacing any previous entry.
    Set {
        /// The target cell.
        pos: Position,
        /// The digit to write.
        digit: Digit,
    },
    /// Empties the cell.
    Clear {
        /// The target cell.
        pos: Position,
    },
    /// Reveals the solution digit of the cell.
    Hint {
        /// The target cell.
        pos: Position,
    },
}

impl SudokuMove {
    /// Returns the cell the move targets.
    #[must_use]
    pub const fn pos(self) -> Position {
        match self {
            Self::Set { pos, .. } | Self::Clear { pos } | Self::Hint { pos } => pos,
        }
    }
}

impl Display for SudokuMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { pos, digit } => write!(f, "{pos}={digit}"),
            Self::Clear { pos } => write!(f, "{pos}=."),
            Self::Hint { pos } => write!(f, "hint {pos}"),
        }
    }
}

/// Checks whether `mv` is legal on `state`.
///
/// Conflicts with peers do not make a move illegal.
///
/// # Errors
///
/// Returns [`IllegalMove::GivenCell`] for any move on a given cell and
/// [`IllegalMove::AlreadyRevealed`] for a hint on a cell that already holds its
/// solution digit.
pub fn check_move(state: &SudokuState, mv: SudokuMove) -> Result<(), IllegalMove> {
    let pos = mv.pos();
    if state.is_given(pos) {
        return Err(IllegalMove::GivenCell);
    }
    if matches!(mv, SudokuMove::Hint { .. }) && state.is_correct(pos) {
        return Err(IllegalMove::AlreadyRevealed);
    }
    Ok(())
}

/// Returns `true` if `mv` is legal on `state`.
#[must_use]
pub fn is_legal(state: &SudokuState, mv: SudokuMove) -> bool {
    check_move(state, mv).is_ok()
}

/// Applies `mv`, returning the new state.
///
/// `Set` is graded against the solution; `Clear` is ungraded and `Hint` counts as
/// a hint rather than a move.
///
/// # Errors
///
/// Returns [`GameError::IllegalMove`] if the move is illegal.
///
/// # Examples
///
/// ```
/// use arcade_sudoku::{Digit, DigitGrid, Position, SudokuMove, SudokuState, apply_move};
///
/// let solution: DigitGrid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()
///         .unwrap();
/// let mut puzzle = solution.clone();
/// let pos = Position::new(0, 0);
/// puzzle[pos] = None;
/// let state = SudokuState::new(puzzle, solution).unwrap();
///
/// let wrong = apply_move(&state, SudokuMove::Set { pos, digit: Digit::D1 }).unwrap();
/// assert!(wrong.outcome.is_mistake());
///
/// let hinted = apply_move(&wrong.state, SudokuMove::Hint { pos }).unwrap();
/// assert!(hinted.outcome.hint);
/// assert!(hinted.state.is_solved());
/// ```
pub fn apply_move(
    state: &SudokuState,
    mv: SudokuMove,
) -> Result<Applied<SudokuState>, GameError> {
    check_move(state, mv)?;
    let mut next = state.clone();
    let outcome = match mv {
        SudokuMove::Set { pos, digit } => {
            next.set(pos, Some(digit));
            let correct = next.is_correct(pos);
            MoveOutcome::graded(correct, correct && next.is_solved())
        }
        SudokuMove::Clear { pos } => {
            next.set(pos, None);
            MoveOutcome::NEUTRAL
        }
        SudokuMove::Hint { pos } => {
            next.set(pos, Some(next.solution_digit(pos)));
            MoveOutcome::HINT
        }
    };
    next.assert_invariants();
    Ok(Applied {
        state: next,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, testing::state};

    #[test]
    fn test_given_cells_are_locked() {
        let state = state();
        let pos = Position::new(0, 0);
        for mv in [
            SudokuMove::Set {
                pos,
                digit: Digit::D5,
            },
            SudokuMove::Clear { pos },
            SudokuMove::Hint { pos },
        ] {
            assert_eq!(check_move(&state, mv), Err(IllegalMove::GivenCell));
        }
    }

    #[test]
    fn test_conflicting_set_is_legal_but_wrong() {
        let state = state();
        let pos = Position::new(2, 0);
        let mv = SudokuMove::Set {
            pos,
            digit: Digit::D5,
        };
        assert!(is_legal(&state, mv));
        let applied = apply_move(&state, mv).unwrap();
        assert_eq!(applied.state.cell(pos), CellState::Filled(Digit::D5));
        assert!(applied.state.has_conflict(pos));
        assert_eq!(applied.outcome.correct, Some(false));
    }

    #[test]
    fn test_correct_set_and_clear() {
        let state = state();
        let pos = Position::new(2, 0);
        let set = apply_move(
            &state,
            SudokuMove::Set {
                pos,
                digit: Digit::D4,
            },
        )
        .unwrap();
        assert_eq!(set.outcome.correct, Some(true));
        assert!(!set.outcome.perfect);

        let cleared = apply_move(&set.state, SudokuMove::Clear { pos }).unwrap();
        assert_eq!(cleared.outcome, MoveOutcome::NEUTRAL);
        assert_eq!(cleared.state, state);
    }

    #[test]
    fn test_hint_rules() {
        let state = state();
        let pos = Position::new(2, 0);
        let hinted = apply_move(&state, SudokuMove::Hint { pos }).unwrap();
        assert_eq!(hinted.outcome, MoveOutcome::HINT);
        assert_eq!(hinted.state.cell(pos), CellState::Filled(Digit::D4));
        assert_eq!(
            apply_move(&hinted.state, SudokuMove::Hint { pos }),
            Err(GameError::IllegalMove(IllegalMove::AlreadyRevealed))
        );
    }

    #[test]
    fn test_display() {
        let pos = Position::new(2, 0);
        assert_eq!(
            SudokuMove::Set {
                pos,
                digit: Digit::D4
            }
            .to_string(),
            "r1c3=4"
        );
        assert_eq!(SudokuMove::Hint { pos }.to_string(), "hint r1c3");
    }
}
