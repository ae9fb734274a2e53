//! Concurrent registry of live matches.
//!
//! The registry only protects entry existence: lookups hand out
//! `Arc<Mutex<MatchState>>` and every state transition happens under that
//! per-match mutex, giving `record_turn` a single-writer critical section
//! per match. Different matches never contend beyond DashMap shard locks.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::state::{MatchState, Mode};

pub type SharedMatch = Arc<Mutex<MatchState>>;

#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: DashMap<Uuid, SharedMatch>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            matches: DashMap::new(),
        }
    }

    /// Create and register an empty match, returning its handle.
    ///
    /// Identifiers are random v4 UUIDs, so concurrent creates never
    /// collide on an id.
    pub fn create(&self, mode: Mode, max_rounds: u32) -> SharedMatch {
        let id = Uuid::new_v4();
        let entry: SharedMatch = Arc::new(Mutex::new(MatchState::new(id, mode, max_rounds)));
        self.matches.insert(id, entry.clone());
        entry
    }

    pub fn get(&self, id: &Uuid) -> Option<SharedMatch> {
        self.matches.get(id).map(|entry| entry.value().clone())
    }

    /// Remove an entry. Returns the match if it was present; once this
    /// returns, subsequent `get`s for the id observe absence.
    pub fn remove(&self, id: &Uuid) -> Option<SharedMatch> {
        self.matches.remove(id).map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
