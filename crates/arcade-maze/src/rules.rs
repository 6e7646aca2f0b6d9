//! Move legality and application.

use arcade_core::{Applied, GameError, IllegalMove, MoveOutcome};

use crate::{MazeState, Operation};

/// Computes the value `op` would produce from the current number.
///
/// # Errors
///
/// Returns [`IllegalMove::OperationUnavailable`] when the operation kind is not
/// enabled, the arithmetic errors from [`Operation::evaluate`], and
/// [`IllegalMove::OutOfRange`] when the result leaves the magnitude bound.
pub fn evaluate(state: &MazeState, op: Operation) -> Result<i64, IllegalMove> {
    if !state.operations().contains(op.kind()) {
        return Err(IllegalMove::OperationUnavailable);
    }
    let value = op.evaluate(state.current())?;
    if !state.in_range(value) {
        return Err(IllegalMove::OutOfRange);
    }
    Ok(value)
}

/// Checks whether `op` is legal on `state`.
///
/// # Errors
///
/// See [`evaluate`].
pub fn check_move(state: &MazeState, op: Operation) -> Result<(), IllegalMove> {
    evaluate(state, op).map(|_| ())
}

/// Returns `true` if `op` is legal on `state`.
#[must_use]
pub fn is_legal(state: &MazeState, op: Operation) -> bool {
    check_move(state, op).is_ok()
}

/// Applies `op`, returning the new state.
///
/// The move is graded correct when it brings the current number closer to the
/// target, and perfect when it lands on it.
///
/// # Errors
///
/// Returns [`GameError::IllegalMove`] if the move is illegal.
///
/// # Examples
///
/// ```
/// use arcade_maze::{MazeState, Operation, OperationSet, apply_move};
///
/// let state = MazeState::new(4, 10, OperationSet::ADD | OperationSet::MULTIPLY, 100, 2);
/// let applied = apply_move(&state, Operation::Multiply(2)).unwrap();
/// assert_eq!(applied.state.current(), 8);
/// assert_eq!(applied.outcome.correct, Some(true));
///
/// let applied = apply_move(&applied.state, Operation::Add(2)).unwrap();
/// assert!(applied.state.is_solved());
/// assert!(apply_move(&state, Operation::Square).is_err());
/// ```
pub fn apply_move(state: &MazeState, op: Operation) -> Result<Applied<MazeState>, GameError> {
    let value = evaluate(state, op)?;
    let mut next = state.clone();
    next.push(op, value);
    next.assert_invariants();

    let closer = next.distance_to_target() < state.distance_to_target();
    Ok(Applied {
        outcome: MoveOutcome::graded(closer, next.is_solved()),
        state: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationSet;

    fn state(current: i64, operations: OperationSet) -> MazeState {
        MazeState::new(current, 20, operations, 1000, 0)
    }

    #[test]
    fn test_disabled_operation_rejected() {
        let state = state(5, OperationSet::ADD | OperationSet::SUBTRACT);
        assert_eq!(
            check_move(&state, Operation::Multiply(2)),
            Err(IllegalMove::OperationUnavailable)
        );
        assert!(is_legal(&state, Operation::Subtract(30)));
    }

    #[test]
    fn test_arithmetic_rejections() {
        let all = state(-4, OperationSet::all());
        assert_eq!(check_move(&all, Operation::Divide(0)), Err(IllegalMove::DivisionByZero));
        assert_eq!(
            check_move(&all, Operation::SquareRoot),
            Err(IllegalMove::NegativeSquareRoot)
        );
        assert_eq!(check_move(&all, Operation::Multiply(300)), Err(IllegalMove::OutOfRange));
        assert!(is_legal(&all, Operation::Multiply(250)));
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let before = state(9, OperationSet::ADD);
        let err = apply_move(&before, Operation::Divide(3)).unwrap_err();
        assert_eq!(err, GameError::IllegalMove(IllegalMove::OperationUnavailable));
        assert_eq!(before.current(), 9);
        assert!(before.applied().is_empty());
    }

    #[test]
    fn test_outcome_grading() {
        let start = state(10, OperationSet::ADD | OperationSet::SUBTRACT);
        let away = apply_move(&start, Operation::Subtract(1)).unwrap();
        assert_eq!(away.outcome.correct, Some(false));
        assert!(away.outcome.is_mistake());

        let toward = apply_move(&away.state, Operation::Add(5)).unwrap();
        assert_eq!(toward.outcome.correct, Some(true));
        assert!(!toward.outcome.perfect);

        let done = apply_move(&toward.state, Operation::Add(6)).unwrap();
        assert!(done.outcome.perfect);
        assert!(done.state.is_solved());
        assert_eq!(
            done.state.applied(),
            &[Operation::Subtract(1), Operation::Add(5), Operation::Add(6)]
        );
        assert_eq!(done.state.start(), 10);
    }
}
