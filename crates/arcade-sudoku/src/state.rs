//! Sudoku puzzle state.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{CellState, Digit, DigitGrid, GivenMask, Position};

/// Error returned when a puzzle and its solution do not fit together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The solution has empty cells or breaks a row, column or box constraint.
    #[display("solution is not a valid completed grid")]
    InvalidSolution,
    /// A given digit differs from the solution.
    #[display("given at {pos} does not match the solution")]
    GivenMismatch {
        /// The offending cell.
        pos: Position,
    },
}

/// A sudoku in progress: the current board, its givens and the solution.
///
/// Setting a digit never fails because of a conflict with a peer; conflicts are
/// reported through [`SudokuState::has_conflict`] instead. Given cells never
/// change.
///
/// # Examples
///
/// ```
/// use arcade_sudoku::{CellState, Digit, DigitGrid, Position, SudokuState};
///
/// let solution: DigitGrid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()
///         .unwrap();
/// let mut puzzle = solution.clone();
/// puzzle[Position::new(0, 0)] = None;
///
/// let state = SudokuState::new(puzzle, solution).unwrap();
/// assert_eq!(state.cell(Position::new(0, 0)), CellState::Empty);
/// assert_eq!(state.cell(Position::new(1, 0)), CellState::Given(Digit::D3));
/// assert!(!state.is_solved());
/// assert_eq!(state.completion_percent(), 98);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SudokuStateRepr", into = "SudokuStateRepr")]
pub struct SudokuState {
    board: DigitGrid,
    givens: GivenMask,
    solution: DigitGrid,
}

#[derive(Serialize, Deserialize)]
struct SudokuStateRepr {
    board: DigitGrid,
    givens: GivenMask,
    solution: DigitGrid,
}

impl From<SudokuState> for SudokuStateRepr {
    fn from(state: SudokuState) -> Self {
        let SudokuState {
            board,
            givens,
            solution,
        } = state;
        Self {
            board,
            givens,
            solution,
        }
    }
}

impl TryFrom<SudokuStateRepr> for SudokuState {
    type Error = PuzzleError;

    fn try_from(repr: SudokuStateRepr) -> Result<Self, Self::Error> {
        let SudokuStateRepr {
            board,
            givens,
            solution,
        } = repr;
        Self::validate_solution(&solution)?;
        for pos in givens.iter() {
            if board[pos] != solution[pos] {
                return Err(PuzzleError::GivenMismatch { pos });
            }
        }
        Ok(Self {
            board,
            givens,
            solution,
        })
    }
}

impl SudokuState {
    /// Creates a state from a puzzle and its solution.
    ///
    /// Every filled cell of `puzzle` becomes a given.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidSolution`] if `solution` is not a valid
    /// completed grid, and [`PuzzleError::GivenMismatch`] if a given differs from
    /// it.
    pub fn new(puzzle: DigitGrid, solution: DigitGrid) -> Result<Self, PuzzleError> {
        let givens = GivenMask::from_grid(&puzzle);
        Self::try_from(SudokuStateRepr {
            board: puzzle,
            givens,
            solution,
        })
    }

    /// Restores a state with player entries on top of the givens.
    ///
    /// # Errors
    ///
    /// Returns the [`SudokuState::new`] errors, and
    /// [`PuzzleError::GivenMismatch`] if `filled` overwrites a given with a
    /// different digit.
    pub fn with_entries(
        puzzle: DigitGrid,
        solution: DigitGrid,
        filled: &DigitGrid,
    ) -> Result<Self, PuzzleError> {
        let mut state = Self::new(puzzle, solution)?;
        for pos in Position::ALL {
            let Some(digit) = filled[pos] else {
                continue;
            };
            if state.is_given(pos) {
                if state.board[pos] != Some(digit) {
                    return Err(PuzzleError::GivenMismatch { pos });
                }
                continue;
            }
            state.board[pos] = Some(digit);
        }
        Ok(state)
    }

    /// Builds a state from generator output, which is consistent by construction.
    pub(crate) fn from_generated(puzzle: DigitGrid, solution: DigitGrid) -> Self {
        debug_assert!(solution.is_valid_solution());
        let state = Self {
            givens: GivenMask::from_grid(&puzzle),
            board: puzzle,
            solution,
        };
        state.assert_invariants();
        state
    }

    fn validate_solution(solution: &DigitGrid) -> Result<(), PuzzleError> {
        if solution.is_valid_solution() {
            Ok(())
        } else {
            Err(PuzzleError::InvalidSolution)
        }
    }

    /// Returns the current board, givens included.
    #[must_use]
    pub fn board(&self) -> &DigitGrid {
        &self.board
    }

    /// Returns the given cells.
    #[must_use]
    pub fn givens(&self) -> GivenMask {
        self.givens
    }

    /// Returns the solution.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the initial puzzle: the givens alone.
    #[must_use]
    pub fn puzzle(&self) -> DigitGrid {
        let mut puzzle = DigitGrid::new();
        for pos in self.givens.iter() {
            puzzle[pos] = self.board[pos];
        }
        puzzle
    }

    /// Returns `true` if `pos` is a given cell.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens.contains(pos)
    }

    /// Returns what the cell at `pos` holds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        match self.board[pos] {
            Some(digit) if self.is_given(pos) => CellState::Given(digit),
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        }
    }

    /// Returns the solution digit at `pos`.
    #[must_use]
    pub fn solution_digit(&self, pos: Position) -> Digit {
        match self.solution[pos] {
            Some(digit) => digit,
            None => unreachable!("solution is validated to be full"),
        }
    }

    /// Returns `true` if the cell at `pos` holds its solution digit.
    #[must_use]
    pub fn is_correct(&self, pos: Position) -> bool {
        self.board[pos] == self.solution[pos]
    }

    /// Returns `true` if the digit at `pos` clashes with a peer.
    #[must_use]
    pub fn has_conflict(&self, pos: Position) -> bool {
        self.board.has_conflict(pos)
    }

    /// Returns the number of filled cells that clash with a peer.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|pos| self.has_conflict(*pos))
            .count()
    }

    /// Returns the share of filled cells, 0-100, regardless of correctness.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        let filled = self.board.filled_count() * 100 / 81;
        u8::try_from(filled).unwrap_or(100)
    }

    /// Returns `true` when every cell is filled with its solution digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board == self.solution
    }

    pub(crate) fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.board[pos] = digit;
    }

    /// Panics if a given cell no longer holds its solution digit.
    ///
    /// # Panics
    ///
    /// Panics on a violated invariant.
    pub fn assert_invariants(&self) {
        for pos in self.givens.iter() {
            assert!(
                self.board[pos].is_some() && self.is_correct(pos),
                "invariant violation: given cell {pos} was modified"
            );
        }
    }
}

impl Display for SudokuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.board, f)
    }
}
