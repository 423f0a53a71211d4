//! The full persisted state shared by both backends.

use crate::models::{MatchRecord, Player, PlayerId, BYE_OPPONENT};
use serde::{Deserialize, Serialize};

use super::StoreError;

/// The players and match_history tables plus the id sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub match_history: Vec<MatchRecord>,
    /// Next id to hand out. Ids are never reused, even after removal.
    #[serde(default)]
    pub next_id: PlayerId,
}

impl Snapshot {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: PlayerId) -> Result<usize, StoreError> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::UnknownPlayer(id))
    }

    pub fn register_player(&mut self, name: &str) -> Player {
        let highest = self.players.iter().map(|p| p.id).max().unwrap_or(0);
        let id = self.next_id.max(highest + 1).max(1);
        self.next_id = id + 1;
        let player = Player::new(id, name);
        self.players.push(player.clone());
        player
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), StoreError> {
        let idx = self.index_of(id)?;
        let referenced = self
            .match_history
            .iter()
            .any(|m| m.winner_id == id || m.loser_id == id);
        if referenced {
            return Err(StoreError::Referenced(id));
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Validate both ids before touching anything, then apply every change.
    pub fn apply_match_result(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError> {
        let winner_idx = self.index_of(winner)?;
        let loser_idx = if loser == BYE_OPPONENT {
            None
        } else {
            Some(self.index_of(loser)?)
        };

        self.players[winner_idx].add_win();
        if let Some(idx) = loser_idx {
            self.players[idx].add_loss();
        }
        self.match_history.push(MatchRecord::new(winner, loser));
        Ok(())
    }

    pub fn delete_matches(&mut self) {
        for p in &mut self.players {
            p.clear_record();
        }
        self.match_history.clear();
    }

    pub fn reset_all(&mut self) {
        self.players.clear();
        self.match_history.clear();
    }
}
