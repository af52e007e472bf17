//! The directory abstraction the engine reads and writes participants
//! through.
//!
//! The engine holds no state of its own; every lookup and every mutation
//! goes through [`Directory`]. The write path carries the transaction
//! boundary: [`Directory::save_all`] must apply every record or none, and
//! both write methods must reject a record whose optimistic version no
//! longer matches the stored one, so that the losing side of a concurrent
//! write observes [`CommitError::Conflict`] instead of silently
//! double-applying effects.

use anyhow::Result;
use std::future::Future;
use thiserror::Error;
use wheelhouse_types::Participant;

/// Errors from the directory's write path.
#[derive(Debug, Error)]
pub enum CommitError {
    /// Another writer saved the record between our read and our write.
    #[error("version conflict on {name}: expected {expected}, found {found}")]
    Conflict {
        name: String,
        expected: u64,
        found: u64,
    },
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Read/write access to the participant population.
pub trait Directory {
    /// Look up a participant by name.
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<Participant>>>;

    /// Whether a participant with this name exists.
    fn exists_by_name(&self, name: &str) -> impl Future<Output = Result<bool>> {
        async move { Ok(self.find_by_name(name).await?.is_some()) }
    }

    /// The names of up to `size` participants starting at `offset`, in the
    /// directory's stable order. A window past the end of the population
    /// yields an empty list, not an error.
    fn names_in_window(&self, offset: u64, size: u32)
        -> impl Future<Output = Result<Vec<String>>>;

    /// Atomic per-record upsert. Returns the saved record with its version
    /// bumped.
    fn save(
        &self,
        participant: Participant,
    ) -> impl Future<Output = Result<Participant, CommitError>>;

    /// Atomic batch upsert: either every record is durably saved or none
    /// is. Records come back in submission order with bumped versions.
    fn save_all(
        &self,
        participants: Vec<Participant>,
    ) -> impl Future<Output = Result<Vec<Participant>, CommitError>>;
}
