//! Session persistence boundary.

use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use arcade_core::Game;
use serde::{Deserialize, Serialize};

use crate::{SessionSnapshot, StoreError};

/// Identifier of a stored session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a random 16-character hexadecimal identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(format!("{:016x}", rand::random::<u64>()))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where session snapshots are kept between requests.
///
/// Implementations wrap a document store or any other backend; this crate ships
/// only [`MemoryStore`].
pub trait SessionStore<G: Game> {
    /// Stores `snapshot` under `id`, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend fails.
    fn save(&mut self, id: &SessionId, snapshot: &SessionSnapshot<G>) -> Result<(), StoreError>;

    /// Loads the snapshot stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`, or
    /// [`StoreError::Backend`] if the backend fails.
    fn load(&self, id: &SessionId) -> Result<SessionSnapshot<G>, StoreError>;
}

/// In-process store backed by a hash map.
#[derive(Debug, Clone)]
pub struct MemoryStore<G: Game> {
    snapshots: HashMap<SessionId, SessionSnapshot<G>>,
}

impl<G: Game> Default for MemoryStore<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> MemoryStore<G> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Returns the number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no session is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<G: Game> SessionStore<G> for MemoryStore<G> {
    fn save(&mut self, id: &SessionId, snapshot: &SessionSnapshot<G>) -> Result<(), StoreError> {
        self.snapshots.insert(id.clone(), snapshot.clone());
        Ok(())
    }

    fn load(&self, id: &SessionId) -> Result<SessionSnapshot<G>, StoreError> {
        self.snapshots
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }
}
