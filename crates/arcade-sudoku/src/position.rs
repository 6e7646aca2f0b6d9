//! Board positions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell position on the 9×9 board, `x` being the column and `y` the row.
///
/// # Examples
///
/// ```
/// use arcade_sudoku::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 67);
/// assert_eq!(pos.box_index(), 7);
/// assert_eq!(pos.to_string(), "r8c5");
/// assert_eq!(pos.peers().count(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionRepr", into = "PositionRepr")]
pub struct Position {
    x: u8,
    y: u8,
}

#[derive(Serialize, Deserialize)]
struct PositionRepr {
    x: u8,
    y: u8,
}

impl From<Position> for PositionRepr {
    fn from(Position { x, y }: Position) -> Self {
        Self { x, y }
    }
}

impl TryFrom<PositionRepr> for Position {
    type Error = String;

    fn try_from(PositionRepr { x, y }: PositionRepr) -> Result<Self, Self::Error> {
        if x < 9 && y < 9 {
            Ok(Self { x, y })
        } else {
            Err(format!("position ({x}, {y}) is outside the board"))
        }
    }
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            #[allow(clippy::cast_possible_truncation)]
            let (x, y) = ((i % 9) as u8, (i / 9) as u8);
            all[i] = Self { x, y };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or more.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the position with row-major index `index`, if it is below 81.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 81 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the 3×3 box index (0-8), numbered row-major.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns `true` if `other` is a different cell sharing a row, column or box.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        (self.x != other.x || self.y != other.y)
            && (self.x == other.x || self.y == other.y || self.box_index() == other.box_index())
    }

    /// Returns the 20 cells sharing a row, column or box with this one.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |other| self.sees(*other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}
