//! Applying decided matches and byes to the store.

use log::debug;

use crate::models::{PlayerId, StoreResultExt, TournamentError, BYE_OPPONENT};
use crate::store::Store;

/// Record that `winner` beat `loser`. A `loser` of `BYE_OPPONENT` records a bye.
///
/// The counter updates and the history record are applied by the store as one
/// unit; an unknown id fails with `InvalidPlayer` and changes nothing.
pub fn report_match<S: Store + ?Sized>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError> {
    record(store, "report_match", winner, loser)
}

/// Record a bye for `winner`: one win, no opponent.
pub fn report_bye<S: Store + ?Sized>(store: &mut S, winner: PlayerId) -> Result<(), TournamentError> {
    record(store, "report_bye", winner, BYE_OPPONENT)
}

fn record<S: Store + ?Sized>(
    store: &mut S,
    operation: &'static str,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError> {
    if winner == BYE_OPPONENT || winner == loser {
        return Err(TournamentError::InvalidPlayer { operation, id: winner });
    }
    store.apply_match_result(winner, loser).during(operation)?;
    debug!("Recorded {}: winner {} loser {}", operation, winner, loser);
    Ok(())
}
