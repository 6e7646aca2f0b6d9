//! Grids shared by the unit tests.

use crate::{DigitGrid, SudokuState};

/// A valid, fully filled grid.
pub(crate) const SOLUTION: &str = concat!(
    "534678912",
    "672195348",
    "198342567",
    "859761423",
    "426853791",
    "713924856",
    "961537284",
    "287419635",
    "345286179",
);

/// [`SOLUTION`] with 51 cells removed.
pub(crate) const PUZZLE: &str = concat!(
    "53..7....",
    "6..195...",
    ".98....6.",
    "8...6...3",
    "4..8.3..1",
    "7...2...6",
    ".6....28.",
    "...419..5",
    "....8..79",
);

pub(crate) fn grid(text: &str) -> DigitGrid {
    text.parse().unwrap()
}

pub(crate) fn state() -> SudokuState {
    SudokuState::new(grid(PUZZLE), grid(SOLUTION)).unwrap()
}
