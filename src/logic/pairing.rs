//! Swiss rounds: pairing generation and playing a round through.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::logic::history::HistoryOracle;
use crate::logic::recorder::{report_bye, report_match};
use crate::logic::standings::player_standings;
use crate::models::{Pairing, PlayerId, StandingsEntry, TournamentError};
use crate::store::Store;

/// Pair the next round from the current standings.
///
/// 1. If the player count is odd, the lowest-ranked player without a bye gets
///    one. It is recorded immediately and that player is left out of the pairings.
/// 2. The best remaining player meets the best remaining opponent they have
///    not played yet. If every opponent but the last is a rematch, the last
///    one is taken regardless.
/// 3. Repeat until everyone is paired.
///
/// Pairings come back in the order they were formed.
pub fn swiss_pairings<S: Store + ?Sized>(store: &mut S) -> Result<Vec<Pairing>, TournamentError> {
    let standings = player_standings(&*store)?;
    pair_standings(store, standings)
}

/// Pair an already-ranked list. `store` answers history queries and receives the bye.
pub fn pair_standings<S: Store + ?Sized>(
    store: &mut S,
    standings: Vec<StandingsEntry>,
) -> Result<Vec<Pairing>, TournamentError> {
    let mut remaining = standings;
    let mut pairings = Vec::with_capacity(remaining.len() / 2);

    if remaining.len() % 2 != 0 {
        let idx = pick_bye(&*store, &remaining)?;
        let entry = remaining.remove(idx);
        report_bye(store, entry.id)?;
        info!("Bye awarded to {} ({})", entry.name, entry.id);
    }

    while !remaining.is_empty() {
        let idx = pick_opponent(&*store, &remaining)?;
        let second = remaining.remove(idx);
        let first = remaining.remove(0);
        debug!(
            "Paired {} ({}) with {} ({})",
            first.name, first.id, second.name, second.id
        );
        pairings.push(Pairing::new(first.id, first.name, second.id, second.name));
    }

    Ok(pairings)
}

/// Index of the bye recipient: scan from the bottom for the first player
/// without a bye. If all already had one, the bottom player gets another.
fn pick_bye<O: HistoryOracle + ?Sized>(
    oracle: &O,
    remaining: &[StandingsEntry],
) -> Result<usize, TournamentError> {
    for (idx, entry) in remaining.iter().enumerate().rev() {
        if !oracle.had_bye(entry.id)? {
            return Ok(idx);
        }
    }

    let last = remaining.len() - 1;
    warn!(
        "Every remaining player already had a bye; {} ({}) receives a second one",
        remaining[last].name, remaining[last].id
    );
    Ok(last)
}

/// Index of the opponent for `remaining[0]`. `remaining` has even length >= 2.
fn pick_opponent<O: HistoryOracle + ?Sized>(
    oracle: &O,
    remaining: &[StandingsEntry],
) -> Result<usize, TournamentError> {
    let first = remaining[0].id;
    let last = remaining.len() - 1;

    for idx in 1..last {
        if !oracle.is_rematch(first, remaining[idx].id)? {
            return Ok(idx);
        }
    }

    if oracle.is_rematch(first, remaining[last].id)? {
        warn!(
            "No fresh opponent left for {} ({}); rematch with {} ({})",
            remaining[0].name, first, remaining[last].name, remaining[last].id
        );
    }
    Ok(last)
}

/// One match of a played round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayedMatch {
    pub pairing: Pairing,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// Pair a round, ask `decide` for each winner, and report every result.
///
/// `decide` must return one of the two ids of the pairing it is given;
/// anything else fails with `InvalidPlayer`. Every decision is checked before
/// any match is reported, so a rejected round leaves only its bye recorded.
pub fn play_round<S, F>(store: &mut S, mut decide: F) -> Result<Vec<PlayedMatch>, TournamentError>
where
    S: Store + ?Sized,
    F: FnMut(&Pairing) -> PlayerId,
{
    let pairings = swiss_pairings(store)?;
    let mut played = Vec::with_capacity(pairings.len());

    for pairing in pairings {
        let winner = decide(&pairing);
        let loser = if winner == pairing.id1 {
            pairing.id2
        } else if winner == pairing.id2 {
            pairing.id1
        } else {
            return Err(TournamentError::InvalidPlayer {
                operation: "play_round",
                id: winner,
            });
        };
        played.push(PlayedMatch {
            pairing,
            winner,
            loser,
        });
    }

    for m in &played {
        report_match(store, m.winner, m.loser)?;
    }

    info!("Round complete: {} matches reported", played.len());
    Ok(played)
}
