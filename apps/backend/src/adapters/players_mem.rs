//! In-memory implementation of the player store port.
//!
//! Keyed by player name, matching the store contract's identity. Suitable
//! for tests and single-process deployments; a database-backed adapter
//! would implement the same trait.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::domain::DomainError;
use crate::repos::players::{PlayerRecord, PlayerStore};

#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    records: DashMap<String, PlayerRecord>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, DomainError> {
        Ok(self.records.get(name).map(|entry| entry.value().clone()))
    }

    async fn save(&self, record: PlayerRecord) -> Result<PlayerRecord, DomainError> {
        self.records.insert(record.name.clone(), record.clone());
        Ok(record)
    }

    async fn top_by_wins(&self, limit: usize) -> Result<Vec<PlayerRecord>, DomainError> {
        let mut records: Vec<PlayerRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // Name as tiebreaker keeps the ordering stable across calls.
        records.sort_by(|a, b| b.total_wins.cmp(&a.total_wins).then(a.name.cmp(&b.name)));
        records.truncate(limit);
        Ok(records)
    }
}
