//! Command-line front end: register boxers, run a bout, print the leaderboard.
//! Run with: cargo run --bin bout -- <command>
//! Reads BOXING_STORE_PATH, BOXING_RANDOM_SEED and BOXING_RANDOM_FILE; flags override them.
//! Results are printed as JSON on stdout, logs go to stderr (RUST_LOG, default info).

use boxing_ring::{read_roster, Arena, BoxingError, Config, NewBoxer};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bout", about = "Boxer registry, ring and leaderboard", version)]
struct Cli {
    /// JSON file holding the boxer records
    #[arg(long)]
    store: Option<PathBuf>,

    /// Seed for reproducible fights
    #[arg(long)]
    seed: Option<u64>,

    /// File with one random fraction per line, consumed one per fight
    #[arg(long)]
    random_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register one boxer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        weight: u32,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        reach: f64,
        #[arg(long)]
        age: u32,
    },
    /// Register every boxer in a CSV roster (name,weight,height,reach,age)
    Import { path: PathBuf },
    /// Show a boxer by name
    Show { name: String },
    /// Show a boxer by id
    Get { id: u64 },
    /// Delete a boxer by id
    Delete { id: u64 },
    /// Put two boxers in the ring and fight
    Fight { first: String, second: String },
    /// Ranked boxers who have fought at least once
    Leaderboard {
        /// wins or win_pct
        #[arg(long, default_value = "wins")]
        sort: String,
    },
    /// Check that the store is reachable
    Health,
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct CreatedResponse {
    ids: Vec<u64>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = Config::from_env();
    if let Some(path) = cli.store {
        config.store_path = path;
    }
    if let Some(seed) = cli.seed {
        config.random_seed = Some(seed);
    }
    if let Some(path) = cli.random_file {
        config.random_file = Some(path);
    }

    let store = config.open_store().map_err(|e| e.to_string())?;
    let random = config.random_source().map_err(|e| e.to_string())?;
    let mut arena = Arena::new(store, random);
    let err = |e: BoxingError| e.to_string();

    match cli.command {
        Command::Add {
            name,
            weight,
            height,
            reach,
            age,
        } => {
            let id = arena
                .create_competitor(NewBoxer::new(name, weight, height, reach, age))
                .map_err(err)?;
            print_json(&CreatedResponse { ids: vec![id] })
        }
        Command::Import { path } => {
            let file = File::open(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let rows = read_roster(file).map_err(|e| e.to_string())?;
            let ids = arena
                .registry_mut()
                .import_roster(rows)
                .map_err(|e| e.to_string())?;
            print_json(&CreatedResponse { ids })
        }
        Command::Show { name } => print_json(&arena.get_competitor_by_name(&name).map_err(err)?),
        Command::Get { id } => print_json(&arena.get_competitor_by_id(id).map_err(err)?),
        Command::Delete { id } => {
            arena.delete_competitor(id).map_err(err)?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        Command::Fight { first, second } => {
            arena.admit_by_name(&first).map_err(err)?;
            arena.admit_by_name(&second).map_err(err)?;
            let bout = arena.run_match_detailed().map_err(err)?;
            print_json(&bout)
        }
        Command::Leaderboard { sort } => print_json(&arena.get_leaderboard(&sort).map_err(err)?),
        Command::Health => {
            arena.registry().health_check().map_err(err)?;
            print_json(&HealthResponse {
                ok: true,
                service: "boxing-ring",
            })
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
