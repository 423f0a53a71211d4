//! Swiss-system tournament: standings, pairings and byes over a pluggable store.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    count_players, delete_matches, delete_players, import_roster, pair_standings, play_round,
    player_standings, register_player, remove_player, report_bye, report_match, swiss_pairings,
    write_standings_csv, HistoryOracle, PlayedMatch,
};
pub use models::{
    MatchRecord, Pairing, Player, PlayerId, StandingsEntry, Tournament, TournamentError, BYE_OPPONENT,
};
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};
