//! Session control for the puzzle arcade games.
//!
//! A [`Session`] drives one play-through of any [`Game`](arcade_core::Game): it
//! generates the initial state, validates and applies moves, detects completion
//! or failure after every move and scores the finished session. Time comes from
//! a [`Clock`] and persistence goes through a [`SessionStore`]; both are traits so
//! that hosts can plug in their own.

pub mod clock;
pub mod error;
pub mod session;
pub mod store;

pub use self::{
    clock::{Clock, ManualClock, SystemClock},
    error::{SessionError, StoreError},
    session::{Session, SessionConfig, SessionSnapshot, SessionStatus},
    store::{MemoryStore, SessionId, SessionStore},
};
