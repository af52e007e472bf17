//! Test doubles for the engine: an in-memory directory with the same
//! optimistic-locking behavior as a versioned row store, and a scripted
//! random source.

use crate::directory::{CommitError, Directory};
use crate::selector::RandomSource;
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};
use wheelhouse_types::{NameError, Participant};

/// In-memory [`Directory`] keyed by name.
///
/// Names iterate in lexicographic order, which doubles as the stable
/// window order. Writes check the record's optimistic version and bump it
/// on success, so a stale writer observes [`CommitError::Conflict`]
/// exactly as it would against a versioned row store.
#[derive(Default)]
pub struct MemoryDirectory {
    records: Mutex<BTreeMap<String, Participant>>,
    next_id: AtomicU64,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh, live participant.
    pub fn register(&self, name: &str) -> Result<Participant, NameError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let participant = Participant::new(id, name)?;
        self.records
            .lock()
            .expect("directory lock poisoned")
            .insert(participant.name.clone(), participant.clone());
        Ok(participant)
    }

    /// Remove a participant, simulating a concurrent deletion.
    pub fn remove(&self, name: &str) -> Option<Participant> {
        self.records
            .lock()
            .expect("directory lock poisoned")
            .remove(name)
    }

    /// Names of all participants not yet eliminated.
    pub fn living_names(&self) -> Vec<String> {
        self.records
            .lock()
            .expect("directory lock poisoned")
            .values()
            .filter(|p| !p.eliminated)
            .map(|p| p.name.clone())
            .collect()
    }

    fn check_version(
        records: &BTreeMap<String, Participant>,
        incoming: &Participant,
    ) -> Result<(), CommitError> {
        match records.get(&incoming.name) {
            Some(existing) if existing.version != incoming.version => {
                Err(CommitError::Conflict {
                    name: incoming.name.clone(),
                    expected: incoming.version,
                    found: existing.version,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Directory for MemoryDirectory {
    async fn find_by_name(&self, name: &str) -> Result<Option<Participant>> {
        Ok(self
            .records
            .lock()
            .expect("directory lock poisoned")
            .get(name)
            .cloned())
    }

    async fn names_in_window(&self, offset: u64, size: u32) -> Result<Vec<String>> {
        Ok(self
            .records
            .lock()
            .expect("directory lock poisoned")
            .keys()
            .skip(offset as usize)
            .take(size as usize)
            .cloned()
            .collect())
    }

    async fn save(&self, mut participant: Participant) -> Result<Participant, CommitError> {
        let mut records = self.records.lock().expect("directory lock poisoned");
        Self::check_version(&records, &participant)?;
        participant.version += 1;
        records.insert(participant.name.clone(), participant.clone());
        Ok(participant)
    }

    async fn save_all(
        &self,
        participants: Vec<Participant>,
    ) -> Result<Vec<Participant>, CommitError> {
        let mut records = self.records.lock().expect("directory lock poisoned");
        // Validate every version before applying any write, so a conflict
        // anywhere in the batch leaves the whole store untouched.
        for participant in &participants {
            Self::check_version(&records, participant)?;
        }
        let mut saved = Vec::with_capacity(participants.len());
        for mut participant in participants {
            participant.version += 1;
            records.insert(participant.name.clone(), participant.clone());
            saved.push(participant);
        }
        Ok(saved)
    }
}

/// Deterministic [`RandomSource`] that replays a scripted index sequence.
///
/// Once the script runs out it keeps returning the final entry. Every
/// returned index is clamped into `[0, bound)` so a short script cannot
/// index past a shrinking list.
pub struct ScriptedIndex {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndex {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A script that returns the same index forever.
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for ScriptedIndex {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.script.get(self.cursor).copied().unwrap_or(0);
        if self.cursor + 1 < self.script.len() {
            self.cursor += 1;
        }
        index.min(bound.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_windows_are_name_ordered() {
        let directory = MemoryDirectory::new();
        for name in ["carol", "alice", "bob"] {
            directory.register(name).unwrap();
        }
        let names = directory.names_in_window(0, 10).await.unwrap();
        assert_eq!(
            names,
            vec!["alice".to_string(), "bob".to_string(), "carol".to_string()]
        );
    }

    #[tokio::test]
    async fn test_save_bumps_version() {
        let directory = MemoryDirectory::new();
        let alice = directory.register("alice").unwrap();
        assert_eq!(alice.version, 0);
        let alice = directory.save(alice).await.unwrap();
        assert_eq!(alice.version, 1);
    }

    #[tokio::test]
    async fn test_stale_save_conflicts() {
        let directory = MemoryDirectory::new();
        let alice = directory.register("alice").unwrap();
        directory.save(alice.clone()).await.unwrap();
        let err = directory.save(alice).await.unwrap_err();
        assert!(matches!(err, CommitError::Conflict { expected: 0, found: 1, .. }));
    }

    #[tokio::test]
    async fn test_exists_by_name_default_impl() {
        let directory = MemoryDirectory::new();
        directory.register("alice").unwrap();
        assert!(directory.exists_by_name("alice").await.unwrap());
        assert!(!directory.exists_by_name("bob").await.unwrap());
    }

    #[test]
    fn test_scripted_index_replays_then_repeats() {
        let mut script = ScriptedIndex::new(vec![2, 0, 1]);
        assert_eq!(script.next_index(10), 2);
        assert_eq!(script.next_index(10), 0);
        assert_eq!(script.next_index(10), 1);
        assert_eq!(script.next_index(10), 1);
    }

    #[test]
    fn test_scripted_index_clamped_to_bound() {
        let mut script = ScriptedIndex::always(5);
        assert_eq!(script.next_index(3), 2);
        assert_eq!(script.next_index(1), 0);
    }
}
