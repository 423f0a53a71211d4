//! Tournament business logic: setup, standings, history lookups, pairing, result recording.

mod history;
mod pairing;
mod recorder;
mod setup;
mod standings;

pub use history::{had_bye_in, played_in, HistoryOracle};
pub use pairing::{pair_standings, play_round, swiss_pairings, PlayedMatch};
pub use recorder::{report_bye, report_match};
pub use setup::{
    count_players, delete_matches, delete_players, import_roster, register_player, remove_player,
    write_standings_csv,
};
pub use standings::{check_integrity, player_standings, rank_players};
