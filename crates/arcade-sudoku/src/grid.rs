//! 9×9 digit grids and given-cell masks.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Digit, Position};

/// Error returned when parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text does not contain exactly 81 cells.
    #[display("expected 81 cells, found {len}")]
    InvalidLength {
        /// Number of cells found.
        len: usize,
    },
    /// A character is neither a digit 1-9 nor an empty marker (`.`, `0`, `_`).
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
        /// Cell index of the character.
        index: usize,
    },
}

/// A 9×9 grid where each cell is empty or holds a digit.
///
/// The text form is 81 characters in row-major order, `.` for empty cells.
/// Whitespace is ignored when parsing, and `0` or `_` are accepted as empty.
///
/// # Examples
///
/// ```
/// use arcade_sudoku::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// let text = grid.to_string();
/// assert!(text.starts_with("5........"));
/// assert_eq!(text.parse::<DigitGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the digit at `pos` also appears in one of its peers.
    ///
    /// Empty cells never conflict.
    #[must_use]
    pub fn has_conflict(&self, pos: Position) -> bool {
        self.get(pos)
            .is_some_and(|digit| pos.peers().any(|peer| self.get(peer) == Some(digit)))
    }

    /// Returns `true` if no filled cell conflicts with a peer.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Position::ALL.into_iter().all(|pos| !self.has_conflict(pos))
    }

    /// Returns `true` if the grid is full and satisfies every row, column and box
    /// constraint.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_full() && self.is_consistent()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<Vec<_>>();
        if chars.len() != 81 {
            return Err(ParseGridError::InvalidLength { len: chars.len() });
        }
        let mut grid = Self::new();
        for (index, ch) in chars.into_iter().enumerate() {
            grid.cells[index] = match ch {
                '.' | '0' | '_' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(|value| Digit::try_from(value).ok()),
                _ => return Err(ParseGridError::InvalidChar { ch, index }),
            };
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for DigitGrid {
    type Error = ParseGridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigitGrid> for String {
    fn from(grid: DigitGrid) -> Self {
        grid.to_string()
    }
}

/// Error returned when a stored [`GivenMask`] has bits past the last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("given mask {bits:#x} has bits outside the 81 cells")]
pub struct GivenMaskError {
    /// The rejected bits.
    pub bits: u128,
}

/// The set of given (pre-filled) cells of a puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u128", into = "u128")]
pub struct GivenMask(u128);

const CELL_BITS: u128 = (1 << 81) - 1;

impl TryFrom<u128> for GivenMask {
    type Error = GivenMaskError;

    fn try_from(bits: u128) -> Result<Self, Self::Error> {
        if bits & !CELL_BITS != 0 {
            return Err(GivenMaskError { bits });
        }
        Ok(Self(bits))
    }
}

impl From<GivenMask> for u128 {
    fn from(mask: GivenMask) -> Self {
        mask.0
    }
}

impl GivenMask {
    /// Returns the mask of every filled cell of `grid`.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        Position::ALL
            .into_iter()
            .filter(|pos| grid[*pos].is_some())
            .fold(Self::default(), |mask, pos| mask.with(pos))
    }

    /// Returns a copy of the mask with `pos` included.
    #[must_use]
    pub const fn with(self, pos: Position) -> Self {
        Self(self.0 | 1 << pos.index())
    }

    /// Returns `true` if `pos` is a given cell.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Returns the number of given cells.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if there are no given cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the given positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }
}

/// What a cell holds from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A given digit that cannot be changed.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit in the cell, given or filled.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
