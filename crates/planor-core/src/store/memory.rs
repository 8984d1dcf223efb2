//! In-process store, used by tests and by hosts that persist elsewhere.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use jiff::Timestamp;

use super::{ChallengeStore, LedgerSink};
use crate::{
    error::{ChallengeError, Result},
    models::{Challenge, ChallengeFilter, LedgerEntry, NewChallenge, NewLedgerEntry},
};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: u64,
    challenges: BTreeMap<u64, Challenge>,
    last_entry_id: u64,
    entries: Vec<LedgerEntry>,
}

/// Mutex-guarded map of challenges plus an append-only ledger.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every ledger entry appended so far.
    pub fn ledger_entries(&self) -> Result<Vec<LedgerEntry>> {
        Ok(self.lock()?.entries.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state.lock().map_err(|_| ChallengeError::Configuration {
            message: "memory store lock poisoned".to_string(),
        })
    }
}

impl ChallengeStore for MemoryStore {
    fn insert(&self, new_challenge: NewChallenge) -> Result<Challenge> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let challenge = new_challenge.into_challenge(state.last_id, Timestamp::now());
        state.challenges.insert(challenge.id, challenge.clone());
        Ok(challenge)
    }

    fn get(&self, id: u64) -> Result<Challenge> {
        self.lock()?
            .challenges
            .get(&id)
            .cloned()
            .ok_or(ChallengeError::ChallengeNotFound { id })
    }

    fn put(&self, challenge: &Challenge) -> Result<Challenge> {
        let mut state = self.lock()?;
        let stored = state
            .challenges
            .get_mut(&challenge.id)
            .ok_or(ChallengeError::ChallengeNotFound { id: challenge.id })?;

        if stored.version != challenge.version {
            return Err(ChallengeError::Conflict {
                id: challenge.id,
                expected: challenge.version,
                found: stored.version,
            });
        }

        let mut updated = challenge.clone();
        updated.version += 1;
        updated.updated_at = Timestamp::now();
        *stored = updated.clone();
        Ok(updated)
    }

    fn list(&self, filter: &ChallengeFilter) -> Result<Vec<Challenge>> {
        let state = self.lock()?;
        Ok(state
            .challenges
            .values()
            .rev()
            .filter(|challenge| filter.matches(challenge))
            .cloned()
            .collect())
    }

    fn delete(&self, id: u64) -> Result<Challenge> {
        self.lock()?
            .challenges
            .remove(&id)
            .ok_or(ChallengeError::ChallengeNotFound { id })
    }
}

impl LedgerSink for MemoryStore {
    fn append_entry(&self, entry: &NewLedgerEntry) -> Result<()> {
        let mut state = self.lock()?;
        state.last_entry_id += 1;
        let id = state.last_entry_id;
        state.entries.push(LedgerEntry {
            id,
            entry: entry.clone(),
            created_at: Timestamp::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ChallengeStatus, Direction, EntryType};

    fn new_challenge(title: &str) -> NewChallenge {
        NewChallenge {
            title: title.to_string(),
            start_amount: dec!(10),
            step_amount: dec!(5),
            total_weeks: 4,
            direction: Direction::Standard,
            custom_amounts: None,
            target_amount: None,
            start_date: date(2024, 1, 1),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        let created = store.insert(new_challenge("Vacation")).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.version, 1);
        assert_eq!(store.get(created.id).unwrap(), created);
        assert!(matches!(
            store.get(99),
            Err(ChallengeError::ChallengeNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_put_bumps_version() {
        let store = MemoryStore::new();
        let mut challenge = store.insert(new_challenge("Vacation")).unwrap();
        challenge.title = "Holiday".to_string();

        let saved = store.put(&challenge).unwrap();
        assert_eq!(saved.version, 2);
        assert_eq!(store.get(saved.id).unwrap().title, "Holiday");
    }

    #[test]
    fn test_stale_put_conflicts() {
        let store = MemoryStore::new();
        let original = store.insert(new_challenge("Vacation")).unwrap();

        let mut first = original.clone();
        first.status = ChallengeStatus::Paused;
        store.put(&first).unwrap();

        let mut second = original;
        second.title = "Stale".to_string();
        let err = store.put(&second).unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::Conflict {
                id: 1,
                expected: 1,
                found: 2
            }
        ));
        assert_eq!(store.get(1).unwrap().status, ChallengeStatus::Paused);
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let store = MemoryStore::new();
        store.insert(new_challenge("Emergency fund")).unwrap();
        let mut second = store.insert(new_challenge("Vacation fund")).unwrap();
        second.status = ChallengeStatus::Paused;
        store.put(&second).unwrap();

        let all = store.list(&ChallengeFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Vacation fund");

        let paused = store
            .list(&ChallengeFilter::with_status(ChallengeStatus::Paused))
            .unwrap();
        assert_eq!(paused.len(), 1);

        let by_title = store
            .list(&ChallengeFilter {
                title_contains: Some("EMERGENCY".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let created = store.insert(new_challenge("Vacation")).unwrap();

        assert_eq!(store.delete(created.id).unwrap().id, created.id);
        assert!(store.get(created.id).is_err());
        assert!(store.delete(created.id).is_err());
    }

    #[test]
    fn test_append_ledger_entry() {
        let store = MemoryStore::new();
        store
            .append_entry(&NewLedgerEntry {
                entry_type: EntryType::Expense,
                amount: dec!(15),
                category: "Savings".to_string(),
                description: "Week 2".to_string(),
                date: date(2024, 1, 8),
                account_id: "checking".to_string(),
            })
            .unwrap();

        let entries = store.ledger_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].entry.amount, dec!(15));
    }
}
