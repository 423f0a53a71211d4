//! Plays a simulated Swiss tournament against a JSON file store and prints the final standings.
//! Run with: cargo run --bin simulate
//! Configure with env: SWISS_STORE_PATH, SWISS_ROUNDS, SWISS_ROSTER, SWISS_SEED, SWISS_STANDINGS_CSV.

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swiss_tournament::config::{SimulationConfig, DEFAULT_ROSTER};
use swiss_tournament::{write_standings_csv, JsonFileStore, Tournament, TournamentError};

fn run(config: &SimulationConfig) -> Result<(), TournamentError> {
    let store = JsonFileStore::open(&config.store_path)
        .map_err(|e| TournamentError::store("open_store", e))?;
    let mut tournament = Tournament::new(store);

    tournament.delete_matches()?;
    tournament.delete_players()?;

    match &config.roster {
        Some(path) => {
            let file = File::open(path).map_err(|e| TournamentError::file(path, e))?;
            tournament.import_roster(file)?;
        }
        None => {
            for name in DEFAULT_ROSTER {
                tournament.register_player(name)?;
            }
        }
    }
    log::info!(
        "Simulating {} rounds with {} players",
        config.rounds,
        tournament.count_players()?
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for round in 1..=config.rounds {
        let played = tournament.play_round(|p| if rng.gen_bool(0.5) { p.id1 } else { p.id2 })?;
        for m in &played {
            log::info!(
                "Round {}: {} vs {} -> winner {}",
                round,
                m.pairing.name1,
                m.pairing.name2,
                m.winner
            );
        }
    }

    let standings = tournament.standings()?;
    println!("***** FINAL STANDINGS ****");
    for (i, entry) in standings.iter().enumerate() {
        if i == 0 {
            println!("{} {}  <----- CHAMP!", i + 1, entry.name);
        } else {
            println!("{} {}", i + 1, entry.name);
        }
    }

    if let Some(path) = &config.standings_csv {
        let file = File::create(path).map_err(|e| TournamentError::file(path, e))?;
        write_standings_csv(&standings, BufWriter::new(file))?;
        log::info!("Wrote standings to {:?}", path);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SimulationConfig::from_env();
    log::info!("Using store at {:?}", config.store_path);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
