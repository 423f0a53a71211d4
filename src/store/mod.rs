//! Persistence of players and match history.
//!
//! The core never talks to a backend directly; it goes through [`Store`]:
//! - [`MemoryStore`]: in-process state, for tests and embedding
//! - [`JsonFileStore`]: a single JSON document, replaced atomically on every write

mod json_file;
mod memory;
mod snapshot;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use crate::models::{MatchRecord, Player, PlayerId};
use thiserror::Error;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Player {0} is referenced by match history")]
    Referenced(PlayerId),
}

/// Read/write interface to the tournament datastore.
///
/// Writes take `&mut self`, so a handle is never mutated from two places at
/// once. `apply_match_result` must be all-or-nothing: either both counters and
/// the history record change, or none of them do.
pub trait Store {
    /// Insert a player with a zeroed record; the store assigns the id.
    fn register_player(&mut self, name: &str) -> Result<Player, StoreError>;

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Remove one player. Refused with [`StoreError::Referenced`] while match
    /// history still names them.
    fn remove_player(&mut self, id: PlayerId) -> Result<(), StoreError>;

    /// All players in store iteration order (ascending id for the shipped backends).
    fn list_players(&self) -> Result<Vec<Player>, StoreError>;

    /// All match records in the order they were appended.
    fn list_match_history(&self) -> Result<Vec<MatchRecord>, StoreError>;

    /// Credit `winner` with a win and `loser` with a loss and append the record.
    /// `loser` may be [`BYE_OPPONENT`](crate::models::BYE_OPPONENT), in which
    /// case only the winner's record changes.
    fn apply_match_result(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError>;

    /// Zero every player's record and clear match history. Players stay registered.
    fn delete_matches(&mut self) -> Result<(), StoreError>;

    /// Clear players and match history.
    fn reset_all(&mut self) -> Result<(), StoreError>;

    fn count_players(&self) -> Result<usize, StoreError> {
        Ok(self.list_players()?.len())
    }
}
