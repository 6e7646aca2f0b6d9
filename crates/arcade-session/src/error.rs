//! Session errors.

use arcade_core::GameError;

use crate::{SessionId, SessionStatus};

/// Error returned by a [`SessionStore`](crate::SessionStore).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    /// No snapshot is stored under the id.
    #[display("no session stored under {id}")]
    NotFound {
        /// The requested id.
        id: SessionId,
    },
    /// The storage backend failed.
    #[display("session store failure: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

/// Error returned by session operations.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SessionError {
    /// The game rejected the request.
    #[display("{_0}")]
    #[from]
    Game(GameError),
    /// The session no longer accepts moves.
    #[display("session is already {status}")]
    Finished {
        /// The terminal status.
        status: SessionStatus,
    },
    /// The session is still in progress, so it has no score yet.
    #[display("session is still in progress")]
    NotFinished,
    /// A snapshot belongs to a different game.
    #[display("snapshot is for {found}, expected {expected}")]
    GameMismatch {
        /// The game resuming the snapshot.
        expected: &'static str,
        /// The game recorded in the snapshot.
        found: String,
    },
    /// Replaying a snapshot's move log does not reproduce its state.
    #[display("snapshot move log does not reproduce its state")]
    CorruptSnapshot,
    /// The store failed.
    #[display("{_0}")]
    #[from]
    Store(StoreError),
}
