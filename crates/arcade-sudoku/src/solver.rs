//! Backtracking search over digit grids.
//!
//! Used to fill complete grids for the generator and to count solutions when
//! uniqueness is requested.

use arcade_core::PuzzleRng;
use rand::seq::SliceRandom as _;

use crate::{Digit, DigitGrid, Position};

const ALL_DIGITS: u16 = 0b1_1111_1111;

/// Digits used in every row, column and box, as 9-bit masks.
#[derive(Debug, Clone, Default)]
struct Houses {
    rows: [u16; 9],
    cols: [u16; 9],
    boxes: [u16; 9],
}

impl Houses {
    /// Returns `None` if the grid already contains a conflict.
    fn from_grid(grid: &DigitGrid) -> Option<Self> {
        let mut houses = Self::default();
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                if houses.candidates(pos) & digit.bit() == 0 {
                    return None;
                }
                houses.place(pos, digit);
            }
        }
        Some(houses)
    }

    fn candidates(&self, pos: Position) -> u16 {
        let used = self.rows[usize::from(pos.y())]
            | self.cols[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())];
        !used & ALL_DIGITS
    }

    fn place(&mut self, pos: Position, digit: Digit) {
        self.toggle(pos, digit);
    }

    fn remove(&mut self, pos: Position, digit: Digit) {
        self.toggle(pos, digit);
    }

    fn toggle(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())] ^= digit.bit();
        self.cols[usize::from(pos.x())] ^= digit.bit();
        self.boxes[usize::from(pos.box_index())] ^= digit.bit();
    }
}

/// Counts the solutions of `grid`, stopping once `limit` is reached.
///
/// Returns 0 for grids that already break a constraint.
///
/// # Examples
///
/// ```
/// use arcade_sudoku::{DigitGrid, count_solutions};
///
/// assert_eq!(count_solutions(&DigitGrid::new(), 2), 2);
///
/// let solved: DigitGrid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()
///         .unwrap();
/// assert_eq!(count_solutions(&solved, 2), 1);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    let Some(mut houses) = Houses::from_grid(grid) else {
        return 0;
    };
    let mut grid = grid.clone();
    let mut count = 0;
    count_from(&mut grid, &mut houses, limit, &mut count);
    count
}

/// Returns `true` if `grid` has exactly one solution.
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    count_solutions(grid, 2) == 1
}

fn count_from(grid: &mut DigitGrid, houses: &mut Houses, limit: usize, count: &mut usize) {
    if *count >= limit {
        return;
    }
    // Most constrained empty cell first.
    let mut best: Option<(Position, u16)> = None;
    for pos in Position::ALL {
        if grid[pos].is_some() {
            continue;
        }
        let candidates = houses.candidates(pos);
        if candidates == 0 {
            return;
        }
        if best.is_none_or(|(_, b)| candidates.count_ones() < b.count_ones()) {
            best = Some((pos, candidates));
        }
    }
    let Some((pos, candidates)) = best else {
        *count += 1;
        return;
    };

    for digit in Digit::ALL {
        if candidates & digit.bit() == 0 {
            continue;
        }
        grid[pos] = Some(digit);
        houses.place(pos, digit);
        count_from(grid, houses, limit, count);
        houses.remove(pos, digit);
        grid[pos] = None;
        if *count >= limit {
            return;
        }
    }
}

/// Fills an empty grid by randomized backtracking.
///
/// Returns `None` if more than `budget` placements were needed.
pub(crate) fn fill_grid(rng: &mut PuzzleRng, budget: usize) -> Option<DigitGrid> {
    let mut grid = DigitGrid::new();
    let mut houses = Houses::default();
    let mut steps = 0;
    fill_from(0, &mut grid, &mut houses, rng, &mut steps, budget)?.then_some(grid)
}

/// `None` when the budget runs out, otherwise whether the grid was completed.
fn fill_from(
    index: usize,
    grid: &mut DigitGrid,
    houses: &mut Houses,
    rng: &mut PuzzleRng,
    steps: &mut usize,
    budget: usize,
) -> Option<bool> {
    let Some(pos) = Position::from_index(index) else {
        return Some(true);
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);

    for digit in digits {
        if houses.candidates(pos) & digit.bit() == 0 {
            continue;
        }
        *steps += 1;
        if *steps > budget {
            return None;
        }
        grid[pos] = Some(digit);
        houses.place(pos, digit);
        if fill_from(index + 1, grid, houses, rng, steps, budget)? {
            return Some(true);
        }
        houses.remove(pos, digit);
        grid[pos] = None;
    }
    Some(false)
}
