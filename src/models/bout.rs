//! Fight results and the record of a completed bout.

use crate::models::boxer::Boxer;
use crate::models::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a bout.
pub type BoutId = Uuid;

/// Outcome of one fight from a single boxer's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FightResult {
    Win,
    Loss,
}

impl FightResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            FightResult::Win => "win",
            FightResult::Loss => "loss",
        }
    }
}

impl FromStr for FightResult {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(FightResult::Win),
            "loss" => Ok(FightResult::Loss),
            other => Err(ValidationError::FightResult(other.to_string())),
        }
    }
}

/// A completed bout. Winner and loser are the snapshots that were admitted to the ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bout {
    pub id: BoutId,
    pub winner: Boxer,
    pub loser: Boxer,
    /// Skill of the boxer admitted first.
    pub skill_1: f64,
    /// Skill of the boxer admitted second.
    pub skill_2: f64,
    /// Probability that the first-admitted boxer wins.
    pub threshold: f64,
    /// Value drawn from the random source.
    pub draw: f64,
    pub fought_at: DateTime<Utc>,
}
