//! Arithmetic operations and their integer semantics.

use std::fmt::{self, Display};

use arcade_core::IllegalMove;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// A set of operation kinds enabled for a puzzle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct OperationSet: u8 {
        /// `x + n`
        const ADD = 0b0000_0001;
        /// `x − n`
        const SUBTRACT = 0b0000_0010;
        /// `x × n`
        const MULTIPLY = 0b0000_0100;
        /// `⌊x ÷ n⌋`
        const DIVIDE = 0b0000_1000;
        /// `x²`
        const SQUARE = 0b0001_0000;
        /// `⌊√x⌋`
        const SQUARE_ROOT = 0b0010_0000;
    }
}

/// One step in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Adds the operand.
    Add(i64),
    /// Subtracts the operand.
    Subtract(i64),
    /// Multiplies by the operand.
    Multiply(i64),
    /// Divides by the operand, rounding toward negative infinity.
    Divide(i64),
    /// Squares the value.
    Square,
    /// Takes the integer square root of a non-negative value.
    SquareRoot,
}

impl Operation {
    /// Returns the kind of this operation as a single-flag set.
    #[must_use]
    pub const fn kind(self) -> OperationSet {
        match self {
            Self::Add(_) => OperationSet::ADD,
            Self::Subtract(_) => OperationSet::SUBTRACT,
            Self::Multiply(_) => OperationSet::MULTIPLY,
            Self::Divide(_) => OperationSet::DIVIDE,
            Self::Square => OperationSet::SQUARE,
            Self::SquareRoot => OperationSet::SQUARE_ROOT,
        }
    }

    /// Evaluates the operation on `value`.
    ///
    /// Division floors the quotient and square root floors the root, so results are
    /// always integers.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::DivisionByZero`] for `Divide(0)`.
    /// - [`IllegalMove::NegativeSquareRoot`] for the square root of a negative value.
    /// - [`IllegalMove::OutOfRange`] if the result overflows `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_maze::Operation;
    ///
    /// assert_eq!(Operation::Divide(2).evaluate(-7), Ok(-4));
    /// assert_eq!(Operation::SquareRoot.evaluate(17), Ok(4));
    /// assert!(Operation::SquareRoot.evaluate(-1).is_err());
    /// ```
    pub fn evaluate(self, value: i64) -> Result<i64, IllegalMove> {
        let result = match self {
            Self::Add(n) => value.checked_add(n),
            Self::Subtract(n) => value.checked_sub(n),
            Self::Multiply(n) => value.checked_mul(n),
            Self::Divide(0) => return Err(IllegalMove::DivisionByZero),
            Self::Divide(n) => floor_div(value, n),
            Self::Square => value.checked_mul(value),
            Self::SquareRoot if value < 0 => return Err(IllegalMove::NegativeSquareRoot),
            Self::SquareRoot => Some(value.isqrt()),
        };
        result.ok_or(IllegalMove::OutOfRange)
    }
}

fn floor_div(lhs: i64, rhs: i64) -> Option<i64> {
    let quotient = lhs.checked_div(rhs)?;
    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(n) => write!(f, "+{n}"),
            Self::Subtract(n) => write!(f, "-{n}"),
            Self::Multiply(n) => write!(f, "×{n}"),
            Self::Divide(n) => write!(f, "÷{n}"),
            Self::Square => f.write_str("x²"),
            Self::SquareRoot => f.write_str("√x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operation::Add(5).evaluate(3), Ok(8));
        assert_eq!(Operation::Subtract(5).evaluate(3), Ok(-2));
        assert_eq!(Operation::Multiply(-4).evaluate(3), Ok(-12));
        assert_eq!(Operation::Square.evaluate(-9), Ok(81));
        assert_eq!(Operation::SquareRoot.evaluate(0), Ok(0));
        assert_eq!(Operation::SquareRoot.evaluate(99), Ok(9));
    }

    #[test]
    fn test_division_floors() {
        assert_eq!(Operation::Divide(2).evaluate(7), Ok(3));
        assert_eq!(Operation::Divide(2).evaluate(-7), Ok(-4));
        assert_eq!(Operation::Divide(-2).evaluate(7), Ok(-4));
        assert_eq!(Operation::Divide(-2).evaluate(-7), Ok(3));
        assert_eq!(Operation::Divide(3).evaluate(-9), Ok(-3));
        assert_eq!(Operation::Divide(0).evaluate(1), Err(IllegalMove::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        assert_eq!(Operation::Add(1).evaluate(i64::MAX), Err(IllegalMove::OutOfRange));
        assert_eq!(Operation::Square.evaluate(i64::MAX), Err(IllegalMove::OutOfRange));
        assert_eq!(Operation::Divide(-1).evaluate(i64::MIN), Err(IllegalMove::OutOfRange));
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(Operation::Divide(3).kind(), OperationSet::DIVIDE);
        assert_eq!(OperationSet::all().iter().count(), 6);
        assert_eq!(Operation::Add(3).to_string(), "+3");
        assert_eq!(Operation::Divide(4).to_string(), "÷4");
        assert_eq!(Operation::SquareRoot.to_string(), "√x");
    }

    proptest! {
        #[test]
        fn prop_floor_div_matches_float_floor(lhs in -10_000_i64..10_000, rhs in -50_i64..50) {
            prop_assume!(rhs != 0);
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let expected = (lhs as f64 / rhs as f64).floor() as i64;
            prop_assert_eq!(Operation::Divide(rhs).evaluate(lhs), Ok(expected));
        }
    }
}
