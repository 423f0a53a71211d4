//! Settings for the `simulate` binary, read from the environment.
//!
//! - `SWISS_STORE_PATH`: JSON store document (default `tournament.json`)
//! - `SWISS_ROUNDS`: rounds to play (default 3)
//! - `SWISS_ROSTER`: optional CSV roster with a `name` column
//! - `SWISS_SEED`: optional seed for the simulated match outcomes
//! - `SWISS_STANDINGS_CSV`: optional path to write final standings to
//!
//! Log filtering goes through `RUST_LOG` as usual.

use std::path::PathBuf;

use log::warn;

/// Players registered when no roster is given.
pub const DEFAULT_ROSTER: [&str; 9] = [
    "Bill", "Heather", "Rob", "Alicia", "Jordan", "Jess", "Peony", "Jane", "Marlin",
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimulationConfig {
    pub store_path: PathBuf,
    pub rounds: u32,
    pub roster: Option<PathBuf>,
    pub seed: Option<u64>,
    pub standings_csv: Option<PathBuf>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("tournament.json")
}

fn default_rounds() -> u32 {
    3
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            rounds: default_rounds(),
            roster: None,
            seed: None,
            standings_csv: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rounds = match non_empty("SWISS_ROUNDS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring SWISS_ROUNDS={:?}, using {}", raw, default_rounds());
                default_rounds()
            }),
            None => default_rounds(),
        };

        let seed = non_empty("SWISS_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring SWISS_SEED={:?}", raw);
                None
            }
        });

        Self {
            store_path: non_empty("SWISS_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_store_path),
            rounds,
            roster: non_empty("SWISS_ROSTER").map(PathBuf::from),
            seed,
            standings_csv: non_empty("SWISS_STANDINGS_CSV").map(PathBuf::from),
        }
    }
}
