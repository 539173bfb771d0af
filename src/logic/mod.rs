//! Ring business logic: registry, match engine, leaderboard ranking.

mod arena;
mod leaderboard;
mod registry;
mod ring;

pub use arena::Arena;
pub use leaderboard::rank;
pub use registry::Registry;
pub use ring::{fighting_skill, win_probability, Ring, RING_CAPACITY};
