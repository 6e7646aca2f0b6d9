//! Sliding puzzle board.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tinyvec::ArrayVec;

/// Smallest supported board side length.
pub const MIN_SIZE: u8 = 3;
/// Largest supported board side length.
pub const MAX_SIZE: u8 = 6;
/// The sentinel value marking the empty cell.
pub const EMPTY: u8 = 0;

/// Cell indices orthogonally adjacent to a cell (two to four of them).
pub type Neighbors = ArrayVec<[usize; 4]>;

/// Error returned when a board cannot be built from external data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The side length is outside `3..=6`.
    #[display("board size {size} is outside {MIN_SIZE}..={MAX_SIZE}")]
    InvalidSize {
        /// The rejected side length.
        size: u8,
    },
    /// The number of tiles does not match `size × size`.
    #[display("expected {expected} tiles, got {actual}")]
    WrongLength {
        /// Required tile count.
        expected: usize,
        /// Supplied tile count.
        actual: usize,
    },
    /// A tile value is not in `0..size²`.
    #[display("tile value {value} is out of range")]
    InvalidTile {
        /// The rejected value.
        value: u8,
    },
    /// A tile value appears more than once.
    #[display("tile value {value} appears more than once")]
    DuplicateTile {
        /// The repeated value.
        value: u8,
    },
    /// The arrangement cannot reach the solved board by legal moves.
    #[display("board cannot be solved")]
    Unsolvable,
}

/// A square sliding puzzle board.
///
/// Tiles are stored row-major. The values are always exactly `{0, 1, …, N²−1}`,
/// with `0` ([`EMPTY`]) marking the empty cell. The solved board reads
/// `1, 2, …, N²−1, 0`.
///
/// # Examples
///
/// ```
/// use arcade_sliding::Board;
///
/// let board = Board::solved(3);
/// assert!(board.is_solved());
/// assert_eq!(board.empty_index(), 8);
/// assert_eq!(board.movable_tiles().as_slice(), &[5, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    size: u8,
    tiles: Vec<u8>,
    empty: usize,
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: u8,
    tiles: Vec<u8>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            tiles: board.tiles,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Self::from_tiles(repr.size, repr.tiles)
    }
}

impl Board {
    /// Returns the solved board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `3..=6`.
    #[must_use]
    pub fn solved(size: u8) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "board size {size} is outside {MIN_SIZE}..={MAX_SIZE}"
        );
        let cells = usize::from(size) * usize::from(size);
        #[expect(clippy::cast_possible_truncation)]
        let mut tiles: Vec<u8> = (1..cells).map(|value| value as u8).collect();
        tiles.push(EMPTY);
        Self {
            size,
            tiles,
            empty: cells - 1,
        }
    }

    /// Builds a board from row-major tile values, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the size, length or value multiset is wrong, or if
    /// the arrangement has the wrong permutation parity to be solvable.
    pub fn from_tiles(size: u8, tiles: Vec<u8>) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        let cells = usize::from(size) * usize::from(size);
        if tiles.len() != cells {
            return Err(BoardError::WrongLength {
                expected: cells,
                actual: tiles.len(),
            });
        }
        let mut seen = vec![false; cells];
        for &value in &tiles {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(BoardError::InvalidTile { value })?;
            if *slot {
                return Err(BoardError::DuplicateTile { value });
            }
            *slot = true;
        }
        let empty = tiles
            .iter()
            .position(|&value| value == EMPTY)
            .ok_or(BoardError::InvalidTile { value: EMPTY })?;
        let board = Self { size, tiles, empty };
        if !board.is_solvable() {
            return Err(BoardError::Unsolvable);
        }
        Ok(board)
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the number of cells (`size²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: a board has at least nine cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<u8> {
        self.tiles.get(index).copied()
    }

    /// Returns the index of the empty cell.
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Converts a cell index to `(row, column)`.
    #[must_use]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        let size = usize::from(self.size);
        (index / size, index % size)
    }

    /// Returns the cell index where `value` belongs in the solved board.
    #[must_use]
    pub fn home_index(&self, value: u8) -> usize {
        if value == EMPTY {
            self.len() - 1
        } else {
            usize::from(value) - 1
        }
    }

    /// Returns the cells orthogonally adjacent to `index`.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Neighbors {
        let size = usize::from(self.size);
        let (row, col) = self.coords(index);
        let mut neighbors = Neighbors::new();
        if row > 0 {
            neighbors.push(index - size);
        }
        if col > 0 {
            neighbors.push(index - 1);
        }
        if col + 1 < size {
            neighbors.push(index + 1);
        }
        if row + 1 < size {
            neighbors.push(index + size);
        }
        neighbors
    }

    /// Returns the cells whose tile may slide into the empty cell.
    #[must_use]
    pub fn movable_tiles(&self) -> Neighbors {
        self.neighbors(self.empty)
    }

    /// Returns `true` if `a` and `b` differ by exactly one row or one column.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        let (ar, ac) = self.coords(a);
        let (br, bc) = self.coords(b);
        ar.abs_diff(br) + ac.abs_diff(bc) == 1
    }

    /// Returns the Manhattan distance between two cells.
    #[must_use]
    pub fn distance(&self, a: usize, b: usize) -> u32 {
        let (ar, ac) = self.coords(a);
        let (br, bc) = self.coords(b);
        #[expect(clippy::cast_possible_truncation)]
        let distance = (ar.abs_diff(br) + ac.abs_diff(bc)) as u32;
        distance
    }

    /// Returns `true` if the board is in the solved arrangement.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.empty == self.len() - 1
            && self
                .tiles
                .iter()
                .zip(1..)
                .take(self.len() - 1)
                .all(|(&value, expected)| usize::from(value) == expected)
    }

    /// Returns the sum of the Manhattan distances of all tiles to their home cells.
    ///
    /// Every move changes exactly one tile's distance by one, so this is a lower
    /// bound on the number of moves needed to solve the board.
    #[must_use]
    pub fn manhattan_distance(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != EMPTY)
            .map(|(index, &value)| self.distance(index, self.home_index(value)))
            .sum()
    }

    /// Returns the number of tiles that are not on their home cell.
    #[must_use]
    pub fn misplaced_tiles(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != EMPTY && self.home_index(value) != index)
            .count()
    }

    /// Returns the number of tile pairs that appear in the wrong order, ignoring the empty cell.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let values: Vec<u8> = self
            .tiles
            .iter()
            .copied()
            .filter(|&value| value != EMPTY)
            .collect();
        values
            .iter()
            .enumerate()
            .map(|(i, a)| values[i + 1..].iter().filter(|b| *b < a).count())
            .sum()
    }

    /// Returns `true` if the solved board is reachable from this arrangement.
    ///
    /// For odd sides the inversion count must be even. For even sides, the
    /// inversion count plus the empty cell's row must be odd.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (empty_row, _) = self.coords(self.empty);
            (inversions + empty_row) % 2 == 1
        }
    }

    /// Slides the tile at `index` into the empty cell without checking adjacency.
    pub(crate) fn slide_unchecked(&mut self, index: usize) {
        self.tiles.swap(self.empty, index);
        self.empty = index;
    }

    /// Panics if the tile multiset or the cached empty index is corrupted.
    ///
    /// # Panics
    ///
    /// Panics with an `invariant violation` message when the board is corrupted.
    pub fn assert_invariants(&self) {
        let mut seen = vec![false; self.len()];
        for &value in &self.tiles {
            let slot = seen.get_mut(usize::from(value));
            match slot {
                Some(slot) if !*slot => *slot = true,
                _ => panic!("invariant violation: tile {value} is duplicated or out of range"),
            }
        }
        assert!(
            self.tiles[self.empty] == EMPTY,
            "invariant violation: empty cell is not at index {}",
            self.empty
        );
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        for (row, cells) in self.tiles.chunks(usize::from(self.size)).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
