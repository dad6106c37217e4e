//! Persistence layer for the task collection.
//!
//! # Responsibility
//! - Own the load/save contract over the single backing JSON document.
//! - Keep filesystem and serialization details behind the `TaskStore` seam.
//!
//! # Invariants
//! - The collection is read in full at the start of an invocation and,
//!   if mutated, written in full at the end. No partial persistence.
//! - Save failures are surfaced as errors; the caller must not report
//!   success after one.
//! - A load-side parse failure is recovered as an empty collection, never
//!   surfaced as an error (availability over strictness).
//!
//! There is no cross-process exclusion: two invocations racing on the same
//! file can lose updates. Accepted limitation for a single-user local tool.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json;
mod mem;

pub use json::JsonStore;
pub use mem::MemStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer failure.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task store I/O failure: {err}"),
            Self::Serialize(err) => write!(f, "task store serialization failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Load/save contract over the backing task collection.
///
/// The seam exists so services can run against the real file store or an
/// in-memory store interchangeably.
pub trait TaskStore {
    /// Returns the current collection, or an empty one when the backing
    /// store is missing, empty, or unparseable.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Overwrites the backing store with the full serialized collection.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}
