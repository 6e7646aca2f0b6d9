//! Errors shared by every game.

/// Reason a move was rejected by a game's legality checker.
///
/// Rejections are recoverable: the state is left untouched and the caller may
/// offer the player another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The move targets a cell outside the board.
    #[display("cell {index} is outside the board")]
    OutOfBounds {
        /// Flat index of the rejected cell.
        index: usize,
    },
    /// The targeted tile is not orthogonally adjacent to the empty cell.
    #[display("cell {index} is not adjacent to the empty cell")]
    NotAdjacent {
        /// Flat index of the rejected cell.
        index: usize,
    },
    /// The operation is not enabled for this puzzle.
    #[display("operation is not available in this puzzle")]
    OperationUnavailable,
    /// Division by zero.
    #[display("division by zero")]
    DivisionByZero,
    /// Square root of a negative value.
    #[display("square root of a negative value")]
    NegativeSquareRoot,
    /// The result would leave the allowed value range.
    #[display("result is out of range")]
    OutOfRange,
    /// The targeted cell is a given (pre-filled) cell.
    #[display("given cells cannot be modified")]
    GivenCell,
    /// A hint was requested for a cell that already holds its solution digit.
    #[display("cell already holds the correct digit")]
    AlreadyRevealed,
}

/// Error returned by the core game operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The move was rejected by the legality checker.
    #[display("illegal move: {_0}")]
    #[from]
    IllegalMove(IllegalMove),
    /// The generator ran out of its attempt budget.
    ///
    /// Retrying with a fresh seed is expected to succeed.
    #[display("puzzle generation exhausted after {attempts} attempts")]
    GenerationExhausted {
        /// Number of attempts that were made.
        attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::from(IllegalMove::NotAdjacent { index: 5 });
        assert_eq!(
            err.to_string(),
            "illegal move: cell 5 is not adjacent to the empty cell"
        );
        assert!(err.is_illegal_move());

        let err = GameError::GenerationExhausted { attempts: 32 };
        assert_eq!(
            err.to_string(),
            "puzzle generation exhausted after 32 attempts"
        );
        assert!(err.is_generation_exhausted());
    }
}
