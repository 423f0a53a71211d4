//! Match-history lookups: byes already awarded and pairs already played.

use crate::models::{MatchRecord, PlayerId, StoreResultExt, TournamentError};
use crate::store::Store;

/// True if `player` has a bye record.
pub fn had_bye_in(history: &[MatchRecord], player: PlayerId) -> bool {
    history.iter().any(|m| m.is_bye() && m.winner_id == player)
}

/// True if `p1` and `p2` have met, whoever won. Byes are not meetings.
pub fn played_in(history: &[MatchRecord], p1: PlayerId, p2: PlayerId) -> bool {
    history.iter().any(|m| !m.is_bye() && m.involves_pair(p1, p2))
}

/// The two questions the pairing engine asks about past rounds.
///
/// Answers are read from current history on every call; history grows each
/// round, so nothing is cached.
pub trait HistoryOracle {
    fn had_bye(&self, player: PlayerId) -> Result<bool, TournamentError>;

    fn is_rematch(&self, p1: PlayerId, p2: PlayerId) -> Result<bool, TournamentError>;
}

impl<S: Store + ?Sized> HistoryOracle for S {
    fn had_bye(&self, player: PlayerId) -> Result<bool, TournamentError> {
        let history = self.list_match_history().during("had_bye")?;
        Ok(had_bye_in(&history, player))
    }

    fn is_rematch(&self, p1: PlayerId, p2: PlayerId) -> Result<bool, TournamentError> {
        let history = self.list_match_history().during("is_rematch")?;
        Ok(played_in(&history, p1, p2))
    }
}
