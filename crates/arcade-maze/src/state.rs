//! The number maze state.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Operation, OperationSet};

/// Error returned when a stored maze state is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MazeStateError {
    /// The magnitude bound is not positive.
    #[display("magnitude bound {max_magnitude} is not positive")]
    InvalidBound {
        /// The stored bound.
        max_magnitude: i64,
    },
    /// A tracked number lies outside the magnitude bound.
    #[display("{name} {value} exceeds magnitude {max_magnitude}")]
    OutOfRange {
        /// Which number: `start`, `target` or `current`.
        name: &'static str,
        /// The stored value.
        value: i64,
        /// The stored bound.
        max_magnitude: i64,
    },
    /// An applied operation cannot be replayed from `start`.
    #[display("applied operation {index} cannot be replayed")]
    IllegalHistory {
        /// Position of the operation in the applied list.
        index: usize,
    },
    /// Replaying the applied operations does not end at `current`.
    #[display("applied operations end at {replayed}, not {current}")]
    HistoryMismatch {
        /// Where the replay ended.
        replayed: i64,
        /// The stored current number.
        current: i64,
    },
}

/// Default bound on the absolute value of every reachable number.
pub const DEFAULT_MAX_MAGNITUDE: i64 = 10_000;

/// A number maze in progress.
///
/// The player starts at `start` and must reach `target` by applying operations
/// from the enabled set. `start`, `target`, the operation set and the magnitude
/// bound never change after generation; each accepted move produces a new state
/// with an updated `current` value and one more applied operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MazeStateRepr", into = "MazeStateRepr")]
pub struct MazeState {
    start: i64,
    target: i64,
    current: i64,
    operations: OperationSet,
    max_magnitude: i64,
    applied: Vec<Operation>,
    witness_len: u32,
}

#[derive(Serialize, Deserialize)]
struct MazeStateRepr {
    start: i64,
    target: i64,
    current: i64,
    operations: OperationSet,
    max_magnitude: i64,
    applied: Vec<Operation>,
    witness_len: u32,
}

impl From<MazeState> for MazeStateRepr {
    fn from(state: MazeState) -> Self {
        let MazeState {
            start,
            target,
            current,
            operations,
            max_magnitude,
            applied,
            witness_len,
        } = state;
        Self {
            start,
            target,
            current,
            operations,
            max_magnitude,
            applied,
            witness_len,
        }
    }
}

impl TryFrom<MazeStateRepr> for MazeState {
    type Error = MazeStateError;

    fn try_from(repr: MazeStateRepr) -> Result<Self, Self::Error> {
        let MazeStateRepr {
            start,
            target,
            current,
            operations,
            max_magnitude,
            applied,
            witness_len,
        } = repr;
        if max_magnitude <= 0 {
            return Err(MazeStateError::InvalidBound { max_magnitude });
        }
        let mut state = Self {
            start,
            target,
            current: start,
            operations,
            max_magnitude,
            applied: Vec::with_capacity(applied.len()),
            witness_len,
        };
        for (name, value) in [("start", start), ("target", target), ("current", current)] {
            if !state.in_range(value) {
                return Err(MazeStateError::OutOfRange {
                    name,
                    value,
                    max_magnitude,
                });
            }
        }
        for (index, op) in applied.into_iter().enumerate() {
            let value = crate::evaluate(&state, op)
                .map_err(|_| MazeStateError::IllegalHistory { index })?;
            state.push(op, value);
        }
        if state.current != current {
            return Err(MazeStateError::HistoryMismatch {
                replayed: state.current,
                current,
            });
        }
        Ok(state)
    }
}

impl MazeState {
    /// Creates a fresh maze positioned at `start`.
    ///
    /// `witness_len` is the length of a known solution path; pass 0 when none is
    /// known.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `target` exceeds `max_magnitude` in absolute value.
    #[must_use]
    pub fn new(
        start: i64,
        target: i64,
        operations: OperationSet,
        max_magnitude: i64,
        witness_len: u32,
    ) -> Self {
        let state = Self {
            start,
            target,
            current: start,
            operations,
            max_magnitude,
            applied: Vec::new(),
            witness_len,
        };
        state.assert_invariants();
        state
    }

    /// Returns the starting number.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the number to reach.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Returns the current number.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Returns the enabled operation kinds.
    #[must_use]
    pub fn operations(&self) -> OperationSet {
        self.operations
    }

    /// Returns the bound on the absolute value of every reachable number.
    #[must_use]
    pub fn max_magnitude(&self) -> i64 {
        self.max_magnitude
    }

    /// Returns the operations applied so far, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[Operation] {
        &self.applied
    }

    /// Returns the length of the generator's solution path.
    #[must_use]
    pub fn witness_len(&self) -> u32 {
        self.witness_len
    }

    /// Returns the distance between the current number and the target.
    #[must_use]
    pub fn distance_to_target(&self) -> u64 {
        self.current.abs_diff(self.target)
    }

    /// Returns `true` once the current number equals the target.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current == self.target
    }

    /// Returns `true` if `value` lies within the magnitude bound.
    #[must_use]
    pub fn in_range(&self, value: i64) -> bool {
        value.unsigned_abs() <= self.max_magnitude.unsigned_abs()
    }

    pub(crate) fn push(&mut self, op: Operation, value: i64) {
        self.applied.push(op);
        self.current = value;
    }

    /// Panics if the state is inconsistent.
    ///
    /// # Panics
    ///
    /// Panics if any tracked number exceeds the magnitude bound.
    pub fn assert_invariants(&self) {
        for (name, value) in [
            ("start", self.start),
            ("target", self.target),
            ("current", self.current),
        ] {
            assert!(
                self.in_range(value),
                "invariant violation: {name} {value} exceeds magnitude {}",
                self.max_magnitude
            );
        }
    }
}

impl Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.current, self.target)
    }
}
