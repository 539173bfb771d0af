//! Runtime configuration from environment variables.
//!
//! `BOXING_STORE_PATH` (default `boxing.json`), `BOXING_RANDOM_SEED` and
//! `BOXING_RANDOM_FILE`. A random file wins over a seed; with neither, draws
//! come from the thread RNG.

use crate::random::{LineRandom, RandomSource, SeededRandom, ThreadRandom};
use crate::store::{JsonFileStore, StoreError};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub const STORE_PATH_VAR: &str = "BOXING_STORE_PATH";
pub const RANDOM_SEED_VAR: &str = "BOXING_RANDOM_SEED";
pub const RANDOM_FILE_VAR: &str = "BOXING_RANDOM_FILE";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
    pub random_seed: Option<u64>,
    pub random_file: Option<PathBuf>,
}

pub fn default_store_path() -> PathBuf {
    PathBuf::from("boxing.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            random_seed: None,
            random_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. An unparsable seed is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_path = lookup(STORE_PATH_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_store_path);
        let random_seed = lookup(RANDOM_SEED_VAR).and_then(|s| match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("Ignoring {}={}: not a u64", RANDOM_SEED_VAR, s);
                None
            }
        });
        let random_file = lookup(RANDOM_FILE_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self {
            store_path,
            random_seed,
            random_file,
        }
    }

    pub fn open_store(&self) -> Result<JsonFileStore, StoreError> {
        JsonFileStore::open(&self.store_path)
    }

    pub fn random_source(&self) -> std::io::Result<Box<dyn RandomSource>> {
        if let Some(path) = &self.random_file {
            log::info!("Drawing random numbers from {}", path.display());
            let file = File::open(path)?;
            return Ok(Box::new(LineRandom::new(BufReader::new(file))));
        }
        let source: Box<dyn RandomSource> = match self.random_seed {
            Some(seed) => {
                log::info!("Drawing random numbers from seed {}", seed);
                Box::new(SeededRandom::new(seed))
            }
            None => Box::new(ThreadRandom),
        };
        Ok(source)
    }
}
