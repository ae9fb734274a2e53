use std::sync::Arc;

use crate::adapters::players_mem::InMemoryPlayerStore;
use crate::repos::players::PlayerStore;
use crate::state::match_registry::MatchRegistry;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live matches, addressable by id.
    pub matches: Arc<MatchRegistry>,
    /// Lifetime player statistics collaborator.
    pub players: Arc<dyn PlayerStore>,
}

impl AppState {
    pub fn new(players: Arc<dyn PlayerStore>) -> Self {
        Self {
            matches: Arc::new(MatchRegistry::new()),
            players,
        }
    }

    /// State backed entirely by in-process storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPlayerStore::new()))
    }
}
