//! Move legality and application.

use arcade_core::{Applied, GameError, IllegalMove, MoveOutcome};
use serde::{Deserialize, Serialize};

use crate::Board;

/// Slide the tile at cell `tile` into the adjacent empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("slide {tile}")]
pub struct SlideMove {
    /// Row-major index of the tile to slide.
    pub tile: usize,
}

impl SlideMove {
    /// Creates a move sliding the tile at `tile`.
    #[must_use]
    pub const fn new(tile: usize) -> Self {
        Self { tile }
    }
}

/// Checks whether `mv` is legal on `board`.
///
/// # Errors
///
/// Returns [`IllegalMove::OutOfBounds`] for indices outside the board and
/// [`IllegalMove::NotAdjacent`] when the tile does not touch the empty cell
/// (including the empty cell itself).
pub fn check_move(board: &Board, mv: SlideMove) -> Result<(), IllegalMove> {
    if mv.tile >= board.len() {
        return Err(IllegalMove::OutOfBounds { index: mv.tile });
    }
    if !board.are_adjacent(mv.tile, board.empty_index()) {
        return Err(IllegalMove::NotAdjacent { index: mv.tile });
    }
    Ok(())
}

/// Returns `true` if `mv` is legal on `board`.
#[must_use]
pub fn is_legal(board: &Board, mv: SlideMove) -> bool {
    check_move(board, mv).is_ok()
}

/// Applies `mv`, returning the new board.
///
/// The move is graded correct when the tile ends up closer to its home cell, and
/// perfect when it lands on it.
///
/// # Errors
///
/// Returns [`GameError::IllegalMove`] if the move is illegal.
///
/// # Panics
///
/// Panics if the resulting board violates the tile invariants, which would mean
/// the input board was corrupted.
///
/// # Examples
///
/// ```
/// use arcade_sliding::{Board, SlideMove, apply_move};
///
/// let board = Board::solved(3);
/// let applied = apply_move(&board, SlideMove::new(7)).unwrap();
/// assert_eq!(applied.state.empty_index(), 7);
/// assert_eq!(applied.outcome.correct, Some(false));
///
/// let back = apply_move(&applied.state, SlideMove::new(8)).unwrap();
/// assert!(back.state.is_solved());
/// assert!(back.outcome.perfect);
/// ```
pub fn apply_move(board: &Board, mv: SlideMove) -> Result<Applied<Board>, GameError> {
    check_move(board, mv)?;
    let Some(value) = board.tile(mv.tile) else {
        unreachable!("bounds checked above");
    };
    let home = board.home_index(value);
    let before = board.distance(mv.tile, home);
    let after = board.distance(board.empty_index(), home);

    let mut next = board.clone();
    next.slide_unchecked(mv.tile);
    next.assert_invariants();

    Ok(Applied {
        state: next,
        outcome: MoveOutcome::graded(after < before, after == 0),
    })
}
