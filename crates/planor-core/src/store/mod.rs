//! Storage seams for challenges and the optional ledger.
//!
//! The engine never owns persistence. It talks to a [`ChallengeStore`] for
//! whole-record reads and versioned replaces, and optionally mirrors deposits
//! into a [`LedgerSink`]. Two implementations ship with the crate: the SQLite
//! [`crate::db::Database`] and the in-process [`MemoryStore`].

use crate::{
    error::Result,
    models::{Challenge, ChallengeFilter, NewChallenge, NewLedgerEntry},
};

pub mod memory;

pub use memory::MemoryStore;

/// Single-record challenge persistence with optimistic concurrency.
pub trait ChallengeStore {
    /// Persists a new challenge and returns it with its assigned ID.
    fn insert(&self, new_challenge: NewChallenge) -> Result<Challenge>;

    /// Loads a challenge, failing with `ChallengeNotFound` when absent.
    fn get(&self, id: u64) -> Result<Challenge>;

    /// Replaces the stored record.
    ///
    /// The write succeeds only if the stored version equals
    /// `challenge.version`; otherwise it fails with `Conflict`. The returned
    /// record carries the incremented version and fresh `updated_at`.
    fn put(&self, challenge: &Challenge) -> Result<Challenge>;

    /// Lists challenges matching `filter`, newest first.
    fn list(&self, filter: &ChallengeFilter) -> Result<Vec<Challenge>>;

    /// Removes a challenge and returns the deleted record.
    fn delete(&self, id: u64) -> Result<Challenge>;
}

/// Destination for ledger entries mirrored from challenge deposits.
pub trait LedgerSink {
    fn append_entry(&self, entry: &NewLedgerEntry) -> Result<()>;
}
