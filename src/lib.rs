//! Boxing ring: library with the boxer registry, the two-slot ring and the leaderboard.

pub mod config;
pub mod logic;
pub mod models;
pub mod random;
pub mod roster;
pub mod store;

pub use config::Config;
pub use logic::{fighting_skill, rank, win_probability, Arena, Registry, Ring, RING_CAPACITY};
pub use models::{
    weight_class, Bout, BoutId, Boxer, BoxerId, BoxerRecord, BoxerStats, BoxingError,
    FightResult, LeaderboardEntry, Lookup, NewBoxer, Result, SortKey, ValidationError,
    WeightClass, HEAVYWEIGHT_MIN, LIGHTWEIGHT_MIN, MAX_AGE, MIDDLEWEIGHT_MIN, MIN_AGE,
    MIN_WEIGHT,
};
pub use random::{
    parse_fraction, LineRandom, RandomError, RandomSource, ScriptedRandom, SeededRandom,
    ThreadRandom,
};
pub use roster::{read_roster, RosterError};
pub use store::{BoxerStore, JsonFileStore, MemoryStore, StoreError};
