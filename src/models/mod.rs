//! Data structures for the ring: boxers, bouts, leaderboard rows and errors.

mod bout;
mod boxer;
mod error;
mod leaderboard;

pub use bout::{Bout, BoutId, FightResult};
pub use boxer::{
    weight_class, Boxer, BoxerId, BoxerRecord, BoxerStats, NewBoxer, WeightClass,
    HEAVYWEIGHT_MIN, LIGHTWEIGHT_MIN, MAX_AGE, MIDDLEWEIGHT_MIN, MIN_AGE, MIN_WEIGHT,
};
pub use error::{BoxingError, Lookup, Result, ValidationError};
pub use leaderboard::{rounded_win_pct, LeaderboardEntry, SortKey};
