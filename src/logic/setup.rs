//! Setup: registering and removing players, clearing results, CSV rosters.

use std::io;

use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{Player, PlayerId, StandingsEntry, StoreResultExt, TournamentError};
use crate::store::Store;

/// Add a player. The store assigns the id; names need not be unique.
pub fn register_player<S: Store + ?Sized>(store: &mut S, name: &str) -> Result<Player, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    let player = store.register_player(name).during("register_player")?;
    info!("Registered {} ({})", player.name, player.id);
    Ok(player)
}

pub fn count_players<S: Store + ?Sized>(store: &S) -> Result<usize, TournamentError> {
    store.count_players().during("count_players")
}

/// Remove one player who has not played yet.
pub fn remove_player<S: Store + ?Sized>(store: &mut S, id: PlayerId) -> Result<(), TournamentError> {
    store.remove_player(id).during("remove_player")
}

/// Zero every record and clear match history; players stay registered.
pub fn delete_matches<S: Store + ?Sized>(store: &mut S) -> Result<(), TournamentError> {
    store.delete_matches().during("delete_matches")?;
    info!("Cleared all match results");
    Ok(())
}

/// Remove every player along with their history.
pub fn delete_players<S: Store + ?Sized>(store: &mut S) -> Result<(), TournamentError> {
    store.reset_all().during("delete_players")?;
    info!("Cleared all players");
    Ok(())
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
}

/// Register every row of a CSV roster (header `name`).
///
/// All rows are read and checked first, so a bad row registers nobody.
pub fn import_roster<S, R>(store: &mut S, reader: R) -> Result<Vec<Player>, TournamentError>
where
    S: Store + ?Sized,
    R: io::Read,
{
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut names = Vec::new();
    for row in rdr.deserialize::<RosterRow>() {
        let row = row?;
        if row.name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        names.push(row.name);
    }

    let players = names
        .iter()
        .map(|name| register_player(store, name))
        .collect::<Result<Vec<_>, _>>()?;
    info!("Imported {} players from roster", players.len());
    Ok(players)
}

#[derive(Debug, Serialize)]
struct StandingsRow<'a> {
    rank: usize,
    id: PlayerId,
    name: &'a str,
    wins: u32,
    matches_played: u32,
    omw: u32,
}

/// Write standings as CSV: `rank,id,name,wins,matches_played,omw`.
pub fn write_standings_csv<W: io::Write>(
    standings: &[StandingsEntry],
    writer: W,
) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, entry) in standings.iter().enumerate() {
        wtr.serialize(StandingsRow {
            rank: i + 1,
            id: entry.id,
            name: &entry.name,
            wins: entry.wins,
            matches_played: entry.matches_played,
            omw: entry.omw,
        })?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
