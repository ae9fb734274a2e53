//! Player store port: lifetime statistics that outlive any single match.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::DomainError;

/// A player's lifetime record as held by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub is_computer: bool,
    pub total_games: u32,
    pub total_wins: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_played: OffsetDateTime,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, is_computer: bool) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            name: name.into(),
            is_computer,
            total_games: 0,
            total_wins: 0,
            created_at: now,
            last_played: now,
        }
    }

    /// Lifetime wins over lifetime games; 0 when no games were played.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) / f64::from(self.total_games)
    }
}

/// Persistence collaborator for lifetime statistics. Identity is the
/// player name; `save` has upsert semantics.
#[async_trait]
pub trait PlayerStore: Send + Sync + fmt::Debug {
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, DomainError>;

    async fn save(&self, record: PlayerRecord) -> Result<PlayerRecord, DomainError>;

    /// Top `limit` players ordered by lifetime wins descending.
    async fn top_by_wins(&self, limit: usize) -> Result<Vec<PlayerRecord>, DomainError>;
}
