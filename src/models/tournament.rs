//! Tournament handle and TournamentError.

use crate::logic;
use crate::models::game::Pairing;
use crate::models::player::{Player, PlayerId, StandingsEntry};
use crate::store::{Store, StoreError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be read or written. Never retried here.
    #[error("store unavailable during {operation}: {source}")]
    StoreUnavailable {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// An operation referenced a player id the store does not know (or cannot use there).
    #[error("{operation}: invalid player {id}")]
    InvalidPlayer { operation: &'static str, id: PlayerId },

    /// Stored counters or history contradict each other.
    #[error("inconsistent tournament state: {0}")]
    InconsistentState(String),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("player {0} has match history and cannot be removed")]
    PlayerHasHistory(PlayerId),

    #[error("CSV error: {0}")]
    Roster(#[from] csv::Error),

    /// A roster or export file could not be opened or created.
    #[error("cannot access {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TournamentError {
    /// Classify a backend error raised while running `operation`.
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::UnknownPlayer(id) => TournamentError::InvalidPlayer { operation, id },
            StoreError::Referenced(id) => TournamentError::PlayerHasHistory(id),
            source => TournamentError::StoreUnavailable { operation, source },
        }
    }

    /// Wrap a failure to open or create the file at `path`.
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TournamentError::File {
            path: path.into(),
            source,
        }
    }
}

/// Attach the operation name to a store result.
pub(crate) trait StoreResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T, TournamentError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn during(self, operation: &'static str) -> Result<T, TournamentError> {
        self.map_err(|e| TournamentError::store(operation, e))
    }
}

/// One running tournament over an injected store.
///
/// The store is opened by the caller, handed in once, and given back by
/// [`Tournament::into_store`]; nothing here connects per call.
#[derive(Debug)]
pub struct Tournament<S: Store> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add a player. The name is trimmed and must not be empty; duplicates are allowed.
    pub fn register_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        logic::register_player(&mut self.store, name)
    }

    /// Register every name in a CSV roster with a `name` column.
    pub fn import_roster<R: io::Read>(&mut self, reader: R) -> Result<Vec<Player>, TournamentError> {
        logic::import_roster(&mut self.store, reader)
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        logic::count_players(&self.store)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), TournamentError> {
        logic::remove_player(&mut self.store, id)
    }

    /// Clear all results but keep the players registered.
    pub fn delete_matches(&mut self) -> Result<(), TournamentError> {
        logic::delete_matches(&mut self.store)
    }

    /// Clear players and results.
    pub fn delete_players(&mut self) -> Result<(), TournamentError> {
        logic::delete_players(&mut self.store)
    }

    pub fn standings(&self) -> Result<Vec<StandingsEntry>, TournamentError> {
        logic::player_standings(&self.store)
    }

    /// Pair the next round. Records a bye in the store when the count is odd.
    pub fn swiss_pairings(&mut self) -> Result<Vec<Pairing>, TournamentError> {
        logic::swiss_pairings(&mut self.store)
    }

    pub fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        logic::report_match(&mut self.store, winner, loser)
    }

    pub fn report_bye(&mut self, winner: PlayerId) -> Result<(), TournamentError> {
        logic::report_bye(&mut self.store, winner)
    }

    pub fn had_bye(&self, player: PlayerId) -> Result<bool, TournamentError> {
        logic::HistoryOracle::had_bye(&self.store, player)
    }

    pub fn is_rematch(&self, p1: PlayerId, p2: PlayerId) -> Result<bool, TournamentError> {
        logic::HistoryOracle::is_rematch(&self.store, p1, p2)
    }

    /// Pair a round and report every match, asking `decide` for each winner.
    pub fn play_round<F>(&mut self, decide: F) -> Result<Vec<logic::PlayedMatch>, TournamentError>
    where
        F: FnMut(&Pairing) -> PlayerId,
    {
        logic::play_round(&mut self.store, decide)
    }
}
