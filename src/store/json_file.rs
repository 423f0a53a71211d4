//! Single-document JSON store.
//!
//! The document is loaded once on open and kept in memory. Every write builds
//! the next state on a copy, writes it to a sibling temp file and renames it
//! over the document; the in-memory state only advances once the rename
//! succeeded. A failed write therefore leaves both disk and memory at the
//! previous state.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::models::{MatchRecord, Player, PlayerId};

use super::{Snapshot, Store, StoreError};

/// File-backed store holding one tournament.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Snapshot,
}

impl JsonFileStore {
    /// Open the document at `path`, or start empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let state: Snapshot = serde_json::from_reader(reader)?;
            info!(
                "Loaded {} players and {} match records from {:?}",
                state.players.len(),
                state.match_history.len(),
                path
            );
            state
        } else {
            debug!("No store at {:?}, starting empty", path);
            Snapshot::default()
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self, next: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, next)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(&tmp, &self.path)?;
        debug!("Wrote store to {:?}", self.path);
        Ok(())
    }

    /// Run `change` against a copy of the state and commit it only if it and
    /// the write both succeed.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Snapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.state.clone();
        let out = change(&mut next)?;
        self.persist(&next)?;
        self.state = next;
        Ok(out)
    }
}

impl Store for JsonFileStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StoreError> {
        self.commit(|s| Ok(s.register_player(name)))
    }

    fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.state.player(id).cloned())
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<(), StoreError> {
        self.commit(|s| s.remove_player(id))
    }

    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.state.players.clone())
    }

    fn list_match_history(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.state.match_history.clone())
    }

    fn apply_match_result(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError> {
        self.commit(|s| s.apply_match_result(winner, loser))
    }

    fn delete_matches(&mut self) -> Result<(), StoreError> {
        self.commit(|s| {
            s.delete_matches();
            Ok(())
        })
    }

    fn reset_all(&mut self) -> Result<(), StoreError> {
        self.commit(|s| {
            s.reset_all();
            Ok(())
        })
    }
}
