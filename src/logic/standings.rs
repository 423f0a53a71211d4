//! Standings: rank by wins, then by opponents' match wins (OMW).

use std::collections::{HashMap, HashSet};

use crate::models::{
    MatchRecord, Player, PlayerId, StandingsEntry, StoreResultExt, TournamentError, BYE_OPPONENT,
};
use crate::store::Store;

/// Current standings, best first.
///
/// Fails with `InconsistentState` before ranking anything if the stored data
/// contradicts itself. Equal wins and equal OMW keep store order.
pub fn player_standings<S: Store + ?Sized>(store: &S) -> Result<Vec<StandingsEntry>, TournamentError> {
    let players = store.list_players().during("player_standings")?;
    let history = store.list_match_history().during("player_standings")?;
    check_integrity(&players, &history)?;
    Ok(rank_players(&players, &history))
}

/// Rank `players` using `history` for the OMW tie-break.
///
/// OMW sums the current wins of each opponent once per match played against
/// them; byes add nothing. With an empty history every OMW is zero and the
/// order is by wins alone.
pub fn rank_players(players: &[Player], history: &[MatchRecord]) -> Vec<StandingsEntry> {
    let wins: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, p.wins)).collect();
    let wins_of = |id: PlayerId| wins.get(&id).copied().unwrap_or(0);

    let mut omw: HashMap<PlayerId, u32> = HashMap::new();
    for m in history.iter().filter(|m| !m.is_bye()) {
        *omw.entry(m.winner_id).or_default() += wins_of(m.loser_id);
        *omw.entry(m.loser_id).or_default() += wins_of(m.winner_id);
    }

    let mut standings: Vec<StandingsEntry> = players
        .iter()
        .map(|p| StandingsEntry {
            id: p.id,
            name: p.name.clone(),
            wins: p.wins,
            matches_played: p.matches_played,
            omw: omw.get(&p.id).copied().unwrap_or(0),
        })
        .collect();

    // Stable: full ties keep store order.
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| b.omw.cmp(&a.omw)));
    standings
}

/// Reject stored data the ranking cannot trust.
pub fn check_integrity(players: &[Player], history: &[MatchRecord]) -> Result<(), TournamentError> {
    let mut ids = HashSet::with_capacity(players.len());
    for p in players {
        if !ids.insert(p.id) {
            return Err(TournamentError::InconsistentState(format!(
                "player id {} appears more than once",
                p.id
            )));
        }
        if p.id == BYE_OPPONENT {
            return Err(TournamentError::InconsistentState(format!(
                "player {:?} uses the reserved bye id",
                p.name
            )));
        }
        if !p.is_consistent() {
            return Err(TournamentError::InconsistentState(format!(
                "player {} has matches_played {} but {} wins and {} losses",
                p.id, p.matches_played, p.wins, p.losses
            )));
        }
    }

    for m in history {
        if !ids.contains(&m.winner_id) {
            return Err(TournamentError::InconsistentState(format!(
                "match history names unknown winner {}",
                m.winner_id
            )));
        }
        if !m.is_bye() && !ids.contains(&m.loser_id) {
            return Err(TournamentError::InconsistentState(format!(
                "match history names unknown loser {}",
                m.loser_id
            )));
        }
        if m.winner_id == m.loser_id {
            return Err(TournamentError::InconsistentState(format!(
                "player {} is recorded as beating themselves",
                m.winner_id
            )));
        }
    }

    Ok(())
}
