//! Player and StandingsEntry data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store (serial, starting at 1).
pub type PlayerId = i64;

/// A registered player with their running record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Full name as registered; not required to be unique.
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Always `wins + losses`.
    pub matches_played: u32,
}

impl Player {
    /// Create a player with a fresh record. Other fields start at zero.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            losses: 0,
            matches_played: 0,
        }
    }

    /// Record a win (a bye counts as one).
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.matches_played += 1;
    }

    /// Record a loss.
    pub fn add_loss(&mut self) {
        self.losses += 1;
        self.matches_played += 1;
    }

    /// Zero the record, keeping id and name.
    pub fn clear_record(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.matches_played = 0;
    }

    /// Whether `matches_played == wins + losses` holds.
    pub fn is_consistent(&self) -> bool {
        self.wins.checked_add(self.losses) == Some(self.matches_played)
    }
}

/// One row of the derived standings table. Never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
    /// Opponents' match wins: sum of the wins of every opponent faced.
    pub omw: u32,
}
