//! Append-only log of accepted moves.

use std::{slice, time::Duration};

use serde::{Deserialize, Serialize};

/// Classification of one accepted move, used for telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the move was correct, or `None` when correctness does not apply
    /// (clearing a cell, consuming a hint).
    pub correct: Option<bool>,
    /// Whether the move was ideal for its position (e.g. a tile landing on its home cell).
    pub perfect: bool,
    /// Whether the move consumed a hint.
    pub hint: bool,
}

impl MoveOutcome {
    /// An outcome that is neither correct nor incorrect.
    pub const NEUTRAL: Self = Self {
        correct: None,
        perfect: false,
        hint: false,
    };

    /// An outcome for a hint consumption.
    pub const HINT: Self = Self {
        correct: None,
        perfect: false,
        hint: true,
    };

    /// Creates an outcome graded as correct or incorrect.
    #[must_use]
    pub const fn graded(correct: bool, perfect: bool) -> Self {
        Self {
            correct: Some(correct),
            perfect,
            hint: false,
        }
    }

    /// Returns `true` if the move was graded as a mistake.
    #[must_use]
    pub const fn is_mistake(&self) -> bool {
        matches!(self.correct, Some(false))
    }
}

/// Immutable record of one accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry<M> {
    mv: M,
    summary: String,
    completes: bool,
    at: Duration,
    outcome: MoveOutcome,
}

impl<M> MoveLogEntry<M> {
    /// Returns the applied move.
    #[must_use]
    pub fn mv(&self) -> &M {
        &self.mv
    }

    /// Returns a textual summary of the state after the move.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns `true` if the move completed the puzzle.
    #[must_use]
    pub fn completes(&self) -> bool {
        self.completes
    }

    /// Returns the session time at which the move was applied.
    #[must_use]
    pub fn at(&self) -> Duration {
        self.at
    }

    /// Returns the move's classification.
    #[must_use]
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }
}

/// Append-only history of accepted moves.
///
/// Entries can only be appended: even incorrect moves stay in the history so that
/// scoring and analytics see everything the player did.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade_core::{MoveLog, MoveOutcome};
///
/// let mut log = MoveLog::new();
/// log.record("up", "state", false, Duration::from_secs(1), MoveOutcome::graded(false, false));
/// log.record("left", "solved", true, Duration::from_secs(2), MoveOutcome::graded(true, true));
///
/// assert_eq!(log.len(), 2);
/// assert!(log.last().unwrap().completes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog<M> {
    entries: Vec<MoveLogEntry<M>>,
}

impl<M> Default for MoveLog<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MoveLog<M> {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an accepted move.
    pub fn record(
        &mut self,
        mv: M,
        summary: impl Into<String>,
        completes: bool,
        at: Duration,
        outcome: MoveOutcome,
    ) {
        self.entries.push(MoveLogEntry {
            mv,
            summary: summary.into(),
            completes,
            at,
            outcome,
        });
    }

    /// Returns the recorded entries in application order.
    #[must_use]
    pub fn entries(&self) -> &[MoveLogEntry<M>] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> slice::Iter<'_, MoveLogEntry<M>> {
        self.entries.iter()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&MoveLogEntry<M>> {
        self.entries.last()
    }

    /// Returns the number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no move was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, M> IntoIterator for &'a MoveLog<M> {
    type Item = &'a MoveLogEntry<M>;
    type IntoIter = slice::Iter<'a, MoveLogEntry<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
