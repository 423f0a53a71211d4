//! In-process store.

use crate::models::{MatchRecord, Player, PlayerId};

use super::{Snapshot, Store, StoreError};

/// Keeps the whole tournament in memory. Never fails on transport.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Snapshot,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot (e.g. a seeded fixture).
    pub fn from_snapshot(state: Snapshot) -> Self {
        Self { state }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }
}

impl Store for MemoryStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StoreError> {
        Ok(self.state.register_player(name))
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.state.player(id).cloned())
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<(), StoreError> {
        self.state.remove_player(id)
    }

    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.state.players.clone())
    }

    fn list_match_history(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.state.match_history.clone())
    }

    fn apply_match_result(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError> {
        self.state.apply_match_result(winner, loser)
    }

    fn delete_matches(&mut self) -> Result<(), StoreError> {
        self.state.delete_matches();
        Ok(())
    }

    fn reset_all(&mut self) -> Result<(), StoreError> {
        self.state.reset_all();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StoreError> {
        Ok(self.state.players.len())
    }
}
