//! Session counters projected from the move log.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::MoveLog;

/// Scoring inputs for one session.
///
/// Telemetry is a snapshot computed from a [`MoveLog`] at read time via
/// [`Telemetry::from_log`]; sessions never keep these counters as separate
/// mutable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Number of accepted moves, hint consumptions excluded.
    pub moves: u32,
    /// Number of hints consumed.
    pub hints_used: u32,
    /// Number of moves graded as correct or incorrect.
    pub graded_moves: u32,
    /// Number of moves graded as incorrect.
    pub mistakes: u32,
    /// Length of the trailing run of correct moves.
    pub current_streak: u32,
    /// Longest run of correct moves.
    pub best_streak: u32,
    /// Session time spent so far (or until completion).
    pub elapsed: Duration,
    /// Lower bound on the moves needed from the initial state, if the game defines one.
    pub par_moves: Option<u32>,
    /// Whether the last accepted move completed the puzzle.
    pub completed: bool,
}

impl Telemetry {
    /// Projects telemetry from a move log.
    ///
    /// Incorrect moves reset the streak; moves without a grade (clears, hints)
    /// leave it untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use arcade_core::{MoveLog, MoveOutcome, Telemetry};
    ///
    /// let mut log = MoveLog::new();
    /// let at = Duration::ZERO;
    /// log.record((), "", false, at, MoveOutcome::graded(true, false));
    /// log.record((), "", false, at, MoveOutcome::graded(false, false));
    /// log.record((), "", false, at, MoveOutcome::HINT);
    /// log.record((), "", true, at, MoveOutcome::graded(true, false));
    ///
    /// let telemetry = Telemetry::from_log(&log, Duration::from_secs(30), None);
    /// assert_eq!(telemetry.moves, 3);
    /// assert_eq!(telemetry.hints_used, 1);
    /// assert_eq!(telemetry.mistakes, 1);
    /// assert_eq!(telemetry.current_streak, 1);
    /// assert!(telemetry.completed);
    /// ```
    #[must_use]
    pub fn from_log<M>(log: &MoveLog<M>, elapsed: Duration, par_moves: Option<u32>) -> Self {
        let mut telemetry = Self {
            elapsed,
            par_moves,
            completed: log.last().is_some_and(|entry| entry.completes()),
            ..Self::default()
        };
        for entry in log {
            let outcome = entry.outcome();
            if outcome.hint {
                telemetry.hints_used += 1;
            } else {
                telemetry.moves += 1;
            }
            if outcome.correct.is_some() {
                telemetry.graded_moves += 1;
            }
            match outcome.correct {
                Some(true) => {
                    telemetry.current_streak += 1;
                    telemetry.best_streak = telemetry.best_streak.max(telemetry.current_streak);
                }
                Some(false) => {
                    telemetry.mistakes += 1;
                    telemetry.current_streak = 0;
                }
                None => {}
            }
        }
        telemetry
    }

    /// Returns the elapsed time in whole seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Returns the share of graded moves that were correct, in percent.
    ///
    /// Returns `None` when no move was graded.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.graded_moves == 0 {
            return None;
        }
        let correct = self.graded_moves - self.mistakes.min(self.graded_moves);
        Some(correct * 100 / self.graded_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveOutcome;

    #[test]
    fn test_empty_log() {
        let log = MoveLog::<()>::new();
        let telemetry = Telemetry::from_log(&log, Duration::from_secs(12), Some(4));
        assert_eq!(telemetry.moves, 0);
        assert_eq!(telemetry.mistakes, 0);
        assert_eq!(telemetry.elapsed_secs(), 12);
        assert_eq!(telemetry.par_moves, Some(4));
        assert!(!telemetry.completed);
        assert_eq!(telemetry.accuracy_percent(), None);
    }

    #[test]
    fn test_streaks() {
        let mut log = MoveLog::new();
        let at = Duration::ZERO;
        for correct in [true, true, true, false, true, true] {
            log.record((), "", false, at, MoveOutcome::graded(correct, false));
        }
        log.record((), "", false, at, MoveOutcome::NEUTRAL);

        let telemetry = Telemetry::from_log(&log, at, None);
        assert_eq!(telemetry.moves, 7);
        assert_eq!(telemetry.best_streak, 3);
        assert_eq!(telemetry.current_streak, 2);
        assert_eq!(telemetry.mistakes, 1);
        assert_eq!(telemetry.graded_moves, 6);
        assert_eq!(telemetry.accuracy_percent(), Some(83));
    }

    #[test]
    fn test_completed_follows_last_entry() {
        let mut log = MoveLog::new();
        log.record((), "", true, Duration::ZERO, MoveOutcome::NEUTRAL);
        assert!(Telemetry::from_log(&log, Duration::ZERO, None).completed);
        log.record((), "", false, Duration::ZERO, MoveOutcome::NEUTRAL);
        assert!(!Telemetry::from_log(&log, Duration::ZERO, None).completed);
    }
}
