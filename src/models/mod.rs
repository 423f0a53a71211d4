//! Data structures for the tournament: players, match records, pairings, standings.

mod game;
mod player;
mod tournament;

pub use game::{MatchRecord, Pairing, BYE_OPPONENT};
pub use player::{Player, PlayerId, StandingsEntry};
pub(crate) use tournament::StoreResultExt;
pub use tournament::{Tournament, TournamentError};
