//! Match history records and round pairings.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Reserved `loser_id` meaning "no opponent": the winner was awarded a bye.
pub const BYE_OPPONENT: PlayerId = -1;

/// One decided match. Append-only; only a bulk reset removes records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    /// `BYE_OPPONENT` for a bye.
    pub loser_id: PlayerId,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self { winner_id, loser_id }
    }

    pub fn bye(winner_id: PlayerId) -> Self {
        Self::new(winner_id, BYE_OPPONENT)
    }

    pub fn is_bye(&self) -> bool {
        self.loser_id == BYE_OPPONENT
    }

    /// True if this record has `a` and `b` on its two sides, in either order.
    pub fn involves_pair(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.winner_id == a && self.loser_id == b) || (self.winner_id == b && self.loser_id == a)
    }
}

/// A pairing for the next round: `(id1, name1, id2, name2)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(id1: PlayerId, name1: impl Into<String>, id2: PlayerId, name2: impl Into<String>) -> Self {
        Self {
            id1,
            name1: name1.into(),
            id2,
            name2: name2.into(),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}

impl From<Pairing> for (PlayerId, String, PlayerId, String) {
    fn from(p: Pairing) -> Self {
        (p.id1, p.name1, p.id2, p.name2)
    }
}
