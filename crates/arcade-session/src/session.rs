//! The session controller.

use std::time::Duration;

use arcade_core::{Game, GameError, MoveLog, MoveOutcome, PuzzleSeed, ScoreResult, Telemetry};
use serde::{Deserialize, Serialize};

use crate::{Clock, SessionError, SessionId, SessionStore, SystemClock};

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How often generation is retried with a derived seed after the generator
    /// exhausts its budget.
    pub generation_retries: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generation_retries: 3,
        }
    }
}

impl SessionConfig {
    /// Sets the number of generation retries.
    #[must_use]
    pub fn generation_retries(mut self, generation_retries: usize) -> Self {
        self.generation_retries = generation_retries;
        self
    }
}

/// Lifecycle of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum SessionStatus {
    /// Moves are accepted.
    #[display("in progress")]
    InProgress,
    /// The puzzle was solved.
    #[display("completed")]
    Completed,
    /// The session hit a terminal failure, such as the sudoku mistake cap.
    #[display("failed")]
    Failed,
    /// The player gave up.
    #[display("abandoned")]
    Abandoned,
}

impl SessionStatus {
    /// Returns `true` for every status except [`SessionStatus::InProgress`].
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Everything needed to persist and later resume a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SessionSnapshot<G: Game> {
    /// The session id.
    pub id: SessionId,
    /// [`Game::NAME`] of the game the session belongs to.
    pub game: String,
    /// The difficulty tier.
    pub difficulty: G::Difficulty,
    /// The seed the initial state was generated from.
    pub seed: PuzzleSeed,
    /// The generated initial state.
    pub initial: G::State,
    /// The state after the last accepted move.
    pub state: G::State,
    /// The accepted moves.
    pub log: MoveLog<G::Move>,
    /// The lifecycle status.
    pub status: SessionStatus,
    /// Session time spent so far.
    pub elapsed: Duration,
}

/// One play-through of a puzzle.
///
/// A session owns the puzzle state and its move log. Moves go through the game's
/// legality checker; rejected moves leave the session untouched and are not
/// logged. After every accepted move the session checks for completion (and
/// failure), freezing its clock once finished. Telemetry and the score are
/// always computed from the log.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade_core::{Game as _, PuzzleSeed};
/// use arcade_maze::{MazeDifficulty, MazeGenerator, NumberMaze};
/// use arcade_session::{ManualClock, Session, SessionConfig, SessionStatus};
///
/// let seed = PuzzleSeed::from_u64(3);
/// let path = MazeGenerator::default()
///     .generate_with_seed(MazeDifficulty::Easy, seed)
///     .unwrap()
///     .path;
///
/// let clock = ManualClock::new();
/// let mut session = Session::start_with_clock(
///     NumberMaze::default(),
///     MazeDifficulty::Easy,
///     seed,
///     &SessionConfig::default(),
///     &clock,
/// )
/// .unwrap();
/// for op in path {
///     // The walk may pass through the target before its last step.
///     if session.status().is_finished() {
///         break;
///     }
///     clock.advance(Duration::from_secs(5));
///     session.play(op).unwrap();
/// }
/// assert_eq!(session.status(), SessionStatus::Completed);
/// assert!(session.score().unwrap().score() >= 50);
/// ```
#[derive(Debug)]
pub struct Session<G: Game, C: Clock = SystemClock> {
    id: SessionId,
    game: G,
    clock: C,
    difficulty: G::Difficulty,
    seed: PuzzleSeed,
    initial: G::State,
    state: G::State,
    log: MoveLog<G::Move>,
    status: SessionStatus,
    par_moves: Option<u32>,
    elapsed_before: Duration,
    resumed_at: Duration,
    frozen_at: Option<Duration>,
}

impl<G: Game> Session<G> {
    /// Starts a session on a random seed with the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Game`] if generation fails after every retry.
    pub fn start(game: G, difficulty: G::Difficulty) -> Result<Self, SessionError> {
        Self::start_with_clock(
            game,
            difficulty,
            PuzzleSeed::random(),
            &SessionConfig::default(),
            SystemClock::new(),
        )
    }
}

impl<G: Game, C: Clock> Session<G, C> {
    /// Starts a session from `seed`, reading time from `clock`.
    ///
    /// If the generator runs out of budget, generation is retried up to
    /// [`SessionConfig::generation_retries`] times with seeds derived from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Game`] if generation fails after every retry.
    pub fn start_with_clock(
        game: G,
        difficulty: G::Difficulty,
        seed: PuzzleSeed,
        config: &SessionConfig,
        clock: C,
    ) -> Result<Self, SessionError> {
        let (seed, initial) = generate_with_retries(&game, difficulty, seed, config)?;
        let par_moves = game.par_moves(&initial);
        let id = SessionId::random();
        log::info!("started {} session {id} ({difficulty}, seed {seed})", G::NAME);
        Ok(Self {
            id,
            resumed_at: clock.now(),
            game,
            clock,
            difficulty,
            seed,
            state: initial.clone(),
            initial,
            log: MoveLog::new(),
            status: SessionStatus::InProgress,
            par_moves,
            elapsed_before: Duration::ZERO,
            frozen_at: None,
        })
    }

    /// Returns the session id.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the game rules.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> G::Difficulty {
        self.difficulty
    }

    /// Returns the seed of the initial state.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the generated initial state.
    #[must_use]
    pub fn initial(&self) -> &G::State {
        &self.initial
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Returns the accepted moves.
    #[must_use]
    pub fn log(&self) -> &MoveLog<G::Move> {
        &self.log
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the session time, frozen once the session is finished.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frozen_at.unwrap_or_else(|| {
            self.elapsed_before + self.clock.now().saturating_sub(self.resumed_at)
        })
    }

    /// Returns the scoring inputs, projected from the move log.
    #[must_use]
    pub fn telemetry(&self) -> Telemetry {
        Telemetry::from_log(&self.log, self.elapsed(), self.par_moves)
    }

    /// Validates and applies a move.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] once the session has ended, and
    /// [`SessionError::Game`] if the move is illegal. In both cases nothing is
    /// recorded.
    pub fn play(&mut self, mv: G::Move) -> Result<MoveOutcome, SessionError> {
        self.ensure_in_progress()?;
        let applied = match self.game.apply(&self.state, &mv) {
            Ok(applied) => applied,
            Err(err) => {
                log::debug!("session {} rejected {mv:?}: {err}", self.id);
                return Err(err.into());
            }
        };

        let at = self.elapsed();
        let completes = self.game.is_complete(&applied.state);
        self.log.record(
            mv,
            applied.state.to_string(),
            completes,
            at,
            applied.outcome,
        );
        self.state = applied.state;
        log::debug!("session {} accepted move {}", self.id, self.log.len());

        if completes {
            self.finish(SessionStatus::Completed);
        } else if self.game.is_failed(&self.state, &self.telemetry()) {
            self.finish(SessionStatus::Failed);
        }
        Ok(applied.outcome)
    }

    /// Gives up the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] if the session has already ended.
    pub fn abandon(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        self.finish(SessionStatus::Abandoned);
        Ok(())
    }

    /// Scores the finished session.
    ///
    /// Sessions that ended without completing the puzzle score 0.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFinished`] while the session is in progress.
    pub fn score(&self) -> Result<ScoreResult, SessionError> {
        if !self.status.is_finished() {
            return Err(SessionError::NotFinished);
        }
        Ok(self.game.score(&self.telemetry(), self.difficulty))
    }

    /// Captures the session for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<G> {
        SessionSnapshot {
            id: self.id.clone(),
            game: G::NAME.to_owned(),
            difficulty: self.difficulty,
            seed: self.seed,
            initial: self.initial.clone(),
            state: self.state.clone(),
            log: self.log.clone(),
            status: self.status,
            elapsed: self.elapsed(),
        }
    }

    /// Resumes a session from a snapshot; the clock continues from the stored
    /// elapsed time.
    ///
    /// The move log is replayed from the initial state to check that it
    /// reproduces the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameMismatch`] if the snapshot belongs to another
    /// game and [`SessionError::CorruptSnapshot`] if the replay fails or diverges.
    pub fn resume(game: G, snapshot: SessionSnapshot<G>, clock: C) -> Result<Self, SessionError> {
        if snapshot.game != G::NAME {
            return Err(SessionError::GameMismatch {
                expected: G::NAME,
                found: snapshot.game,
            });
        }
        let mut replayed = snapshot.initial.clone();
        for entry in &snapshot.log {
            replayed = game
                .apply(&replayed, entry.mv())
                .map_err(|_| SessionError::CorruptSnapshot)?
                .state;
        }
        if replayed != snapshot.state {
            return Err(SessionError::CorruptSnapshot);
        }

        let par_moves = game.par_moves(&snapshot.initial);
        let frozen_at = snapshot.status.is_finished().then_some(snapshot.elapsed);
        log::info!(
            "resumed {} session {} at {:?} ({})",
            G::NAME,
            snapshot.id,
            snapshot.elapsed,
            snapshot.status
        );
        Ok(Self {
            id: snapshot.id,
            resumed_at: clock.now(),
            game,
            clock,
            difficulty: snapshot.difficulty,
            seed: snapshot.seed,
            initial: snapshot.initial,
            state: snapshot.state,
            log: snapshot.log,
            status: snapshot.status,
            par_moves,
            elapsed_before: snapshot.elapsed,
            frozen_at,
        })
    }

    /// Saves a snapshot of the session under its id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the store fails.
    pub fn save<S>(&self, store: &mut S) -> Result<(), SessionError>
    where
        S: SessionStore<G> + ?Sized,
    {
        store.save(&self.id, &self.snapshot())?;
        Ok(())
    }

    /// Loads and resumes the session stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the store fails, and the
    /// [`Session::resume`] errors.
    pub fn load<S>(game: G, store: &S, id: &SessionId, clock: C) -> Result<Self, SessionError>
    where
        S: SessionStore<G> + ?Sized,
    {
        let snapshot = store.load(id)?;
        Self::resume(game, snapshot, clock)
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::Finished {
                status: self.status,
            });
        }
        Ok(())
    }

    fn finish(&mut self, status: SessionStatus) {
        let elapsed = self.elapsed();
        self.frozen_at = Some(elapsed);
        self.status = status;
        log::info!(
            "{} session {} {status} after {} moves in {elapsed:?}",
            G::NAME,
            self.id,
            self.log.len()
        );
    }
}

fn generate_with_retries<G: Game>(
    game: &G,
    difficulty: G::Difficulty,
    seed: PuzzleSeed,
    config: &SessionConfig,
) -> Result<(PuzzleSeed, G::State), SessionError> {
    let mut last_err = None;
    for retry in 0..=config.generation_retries {
        let attempt_seed = if retry == 0 {
            seed
        } else {
            seed.derive("session", retry as u64)
        };
        match game.generate(difficulty, attempt_seed) {
            Ok(state) => return Ok((attempt_seed, state)),
            Err(err @ GameError::GenerationExhausted { .. }) => {
                log::warn!("{} generation failed on retry {retry}: {err}", G::NAME);
                last_err = Some(err);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(last_err
        .unwrap_or(GameError::GenerationExhausted { attempts: 0 })
        .into())
}

#[cfg(test)]
mod tests {
    use arcade_core::IllegalMove;
    use arcade_maze::{MazeConfig, MazeDifficulty, NumberMaze, Operation};
    use arcade_sliding::{
        SlideMove, SlidingConfig, SlidingDifficulty, SlidingGenerator, SlidingPuzzle,
    };
    use arcade_sudoku::{Digit, Position, SudokuDifficulty, SudokuGame, SudokuMove};

    use super::*;
    use crate::{ManualClock, MemoryStore, StoreError};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SCRAMBLE: u32 = 30;

    fn sliding_session(
        seed: PuzzleSeed,
        clock: &ManualClock,
    ) -> Session<SlidingPuzzle, &ManualClock> {
        let game = SlidingPuzzle::new(SlidingConfig::default().scramble_moves(SCRAMBLE));
        Session::start_with_clock(
            game,
            SlidingDifficulty::Easy,
            seed,
            &SessionConfig::default(),
            clock,
        )
        .unwrap()
    }

    fn sliding_solution(seed: PuzzleSeed) -> Vec<SlideMove> {
        SlidingGenerator::new(SlidingConfig::default().scramble_moves(SCRAMBLE))
            .generate_with_seed(SlidingDifficulty::Easy, seed)
            .solution()
    }

    #[test]
    fn test_sliding_session_completes_and_freezes() {
        init_logger();
        let clock = ManualClock::new();
        let seed = PuzzleSeed::from_u64(1);
        let mut session = sliding_session(seed, &clock);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.score(), Err(SessionError::NotFinished));

        for mv in sliding_solution(seed) {
            if session.status().is_finished() {
                break;
            }
            clock.advance(Duration::from_secs(1));
            session.play(mv).unwrap();
        }
        assert_eq!(session.status(), SessionStatus::Completed);
        assert!(session.log().last().unwrap().completes());

        let elapsed = session.elapsed();
        clock.advance(Duration::from_secs(100));
        assert_eq!(session.elapsed(), elapsed);

        let telemetry = session.telemetry();
        assert!(telemetry.completed);
        assert_eq!(telemetry.moves as usize, session.log().len());
        assert_eq!(telemetry.par_moves, Some(session.initial().manhattan_distance()));

        let score = session.score().unwrap();
        assert_eq!(score, arcade_sliding::score(&telemetry, SlidingDifficulty::Easy));
        assert!(score.score() >= 50);

        assert_eq!(
            session.play(SlideMove::new(7)),
            Err(SessionError::Finished {
                status: SessionStatus::Completed
            })
        );
    }

    #[test]
    fn test_illegal_move_is_not_logged() {
        let clock = ManualClock::new();
        let mut session = sliding_session(PuzzleSeed::from_u64(2), &clock);
        let before = session.state().clone();
        assert_eq!(
            session.play(SlideMove::new(100)),
            Err(SessionError::Game(GameError::IllegalMove(
                IllegalMove::OutOfBounds { index: 100 }
            )))
        );
        assert!(session.log().is_empty());
        assert_eq!(session.state(), &before);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    fn sudoku_session(clock: &ManualClock) -> Session<SudokuGame, &ManualClock> {
        Session::start_with_clock(
            SudokuGame::default(),
            SudokuDifficulty::Easy,
            PuzzleSeed::from_u64(3),
            &SessionConfig::default(),
            clock,
        )
        .unwrap()
    }

    fn first_empty(session: &Session<SudokuGame, &ManualClock>) -> Position {
        Position::ALL
            .into_iter()
            .find(|pos| session.state().board()[*pos].is_none())
            .unwrap()
    }

    #[test]
    fn test_sudoku_mistake_cap_fails_session() {
        init_logger();
        let clock = ManualClock::new();
        let mut session = sudoku_session(&clock);
        let pos = first_empty(&session);
        let right = session.state().solution_digit(pos);
        let wrong = Digit::ALL.into_iter().find(|d| *d != right).unwrap();

        for _ in 0..3 {
            let outcome = session.play(SudokuMove::Set { pos, digit: wrong }).unwrap();
            assert!(outcome.is_mistake());
        }
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(session.telemetry().mistakes, 3);
        assert_eq!(session.score().unwrap(), ScoreResult::INCOMPLETE);
    }

    #[test]
    fn test_sudoku_hints_are_not_moves() {
        let clock = ManualClock::new();
        let mut session = sudoku_session(&clock);
        let pos = first_empty(&session);
        let outcome = session.play(SudokuMove::Hint { pos }).unwrap();
        assert!(outcome.hint);
        assert_eq!(
            session.play(SudokuMove::Hint { pos }),
            Err(SessionError::Game(GameError::IllegalMove(
                IllegalMove::AlreadyRevealed
            )))
        );

        let telemetry = session.telemetry();
        assert_eq!(telemetry.hints_used, 1);
        assert_eq!(telemetry.moves, 0);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn test_abandon() {
        let clock = ManualClock::new();
        let mut session = Session::start_with_clock(
            NumberMaze::default(),
            MazeDifficulty::Medium,
            PuzzleSeed::from_u64(4),
            &SessionConfig::default(),
            &clock,
        )
        .unwrap();
        clock.advance(Duration::from_secs(30));
        session.abandon().unwrap();
        clock.advance(Duration::from_secs(30));

        assert_eq!(session.status(), SessionStatus::Abandoned);
        assert_eq!(session.elapsed(), Duration::from_secs(30));
        assert_eq!(session.score().unwrap().score(), 0);
        assert!(session.abandon().unwrap_err().is_finished());
    }

    #[test]
    fn test_generation_exhaustion_after_retries() {
        let config = MazeConfig::default().max_magnitude(0).max_walk_attempts(2);
        let err = Session::start_with_clock(
            NumberMaze::new(config),
            MazeDifficulty::Easy,
            PuzzleSeed::from_u64(5),
            &SessionConfig::default().generation_retries(2),
            ManualClock::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SessionError::Game(GameError::GenerationExhausted { attempts: 2 })
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let clock = ManualClock::new();
        let mut session = sliding_session(PuzzleSeed::from_u64(6), &clock);
        for _ in 0..3 {
            clock.advance(Duration::from_secs(10));
            let tile = session.state().movable_tiles()[0];
            session.play(SlideMove::new(tile)).unwrap();
        }
        clock.advance(Duration::from_secs(5));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.elapsed, Duration::from_secs(35));
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: SessionSnapshot<SlidingPuzzle> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut store = MemoryStore::new();
        session.save(&mut store).unwrap();
        assert_eq!(store.len(), 1);

        let later = ManualClock::new();
        later.set(Duration::from_secs(1000));
        let resumed =
            Session::load(session.game().clone(), &store, session.id(), &later).unwrap();
        assert_eq!(resumed.elapsed(), Duration::from_secs(35));
        later.advance(Duration::from_secs(5));
        assert_eq!(resumed.elapsed(), Duration::from_secs(40));
        assert_eq!(resumed.log(), session.log());
        assert_eq!(resumed.state(), session.state());
        assert_eq!(resumed.telemetry().moves, 3);
    }

    #[test]
    fn test_resume_rejects_bad_snapshots() {
        let clock = ManualClock::new();
        let mut session = sliding_session(PuzzleSeed::from_u64(7), &clock);
        let tile = session.state().movable_tiles()[0];
        session.play(SlideMove::new(tile)).unwrap();
        let game = session.game().clone();

        let mut tampered = session.snapshot();
        tampered.state = tampered.initial.clone();
        assert_eq!(
            Session::resume(game.clone(), tampered, &clock).unwrap_err(),
            SessionError::CorruptSnapshot
        );

        let mut foreign = session.snapshot();
        foreign.game = "sudoku".to_owned();
        assert_eq!(
            Session::resume(game, foreign, &clock).unwrap_err(),
            SessionError::GameMismatch {
                expected: "sliding-puzzle",
                found: "sudoku".to_owned()
            }
        );
    }

    #[test]
    fn test_decoding_rejects_out_of_range_maze() {
        let clock = ManualClock::new();
        let session = Session::start_with_clock(
            NumberMaze::default(),
            MazeDifficulty::Easy,
            PuzzleSeed::from_u64(9),
            &SessionConfig::default(),
            &clock,
        )
        .unwrap();
        let json = serde_json::to_string(&session.snapshot()).unwrap();

        let decoded: SessionSnapshot<NumberMaze> = serde_json::from_str(&json).unwrap();
        let mut resumed = Session::resume(NumberMaze::default(), decoded, &clock).unwrap();
        resumed.play(Operation::Add(1)).unwrap();

        let start = format!("\"start\":{}", session.initial().start());
        assert!(json.contains(&start));
        let corrupted = json.replace(&start, "\"start\":99999999");
        let err = serde_json::from_str::<SessionSnapshot<NumberMaze>>(&corrupted).unwrap_err();
        assert!(err.to_string().contains("start 99999999 exceeds magnitude 10000"));
    }

    struct FailingStore;

    impl<G: Game> SessionStore<G> for FailingStore {
        fn save(&mut self, _: &SessionId, _: &SessionSnapshot<G>) -> Result<(), StoreError> {
            Err(StoreError::Backend {
                message: "disk full".to_owned(),
            })
        }

        fn load(&self, id: &SessionId) -> Result<SessionSnapshot<G>, StoreError> {
            Err(StoreError::NotFound { id: id.clone() })
        }
    }

    #[test]
    fn test_store_errors() {
        let clock = ManualClock::new();
        let session = sliding_session(PuzzleSeed::from_u64(8), &clock);
        let err = session.save(&mut FailingStore).unwrap_err();
        assert_eq!(err.to_string(), "session store failure: disk full");

        let store = MemoryStore::<SlidingPuzzle>::new();
        let id = SessionId::new("missing");
        let err = Session::load(SlidingPuzzle::default(), &store, &id, &clock).unwrap_err();
        assert_eq!(
            err,
            SessionError::Store(StoreError::NotFound { id: id.clone() })
        );
        assert!(Session::load(SlidingPuzzle::default(), &FailingStore, &id, &clock).is_err());
    }
}
