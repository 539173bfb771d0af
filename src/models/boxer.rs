//! Boxer records, the validated creation request, and weight classes.

use crate::models::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store on insert. Never reused for another boxer.
pub type BoxerId = u64;

/// Lightest weight (lbs) a boxer may be registered at.
pub const MIN_WEIGHT: u32 = 125;
pub const LIGHTWEIGHT_MIN: u32 = 133;
pub const MIDDLEWEIGHT_MIN: u32 = 166;
pub const HEAVYWEIGHT_MIN: u32 = 203;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 40;

/// Division a boxer fights in, derived from weight alone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a weight. Total for every weight of at least [`MIN_WEIGHT`].
pub fn weight_class(weight: u32) -> Result<WeightClass, ValidationError> {
    match weight {
        w if w >= HEAVYWEIGHT_MIN => Ok(WeightClass::Heavyweight),
        w if w >= MIDDLEWEIGHT_MIN => Ok(WeightClass::Middleweight),
        w if w >= LIGHTWEIGHT_MIN => Ok(WeightClass::Lightweight),
        w if w >= MIN_WEIGHT => Ok(WeightClass::Featherweight),
        w => {
            log::error!("Invalid weight class lookup for weight: {}", w);
            Err(ValidationError::Weight { weight: w })
        }
    }
}

/// Attributes supplied when registering a boxer. Also the row shape of a roster CSV.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBoxer {
    pub name: String,
    /// Pounds.
    pub weight: u32,
    /// Inches.
    pub height: f64,
    /// Inches.
    pub reach: f64,
    pub age: u32,
}

impl NewBoxer {
    pub fn new(name: impl Into<String>, weight: u32, height: f64, reach: f64, age: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
            reach,
            age,
        }
    }

    /// Check every attribute against its bound. The first failing field is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.weight < MIN_WEIGHT {
            return Err(ValidationError::Weight {
                weight: self.weight,
            });
        }
        // Written as negations so NaN is rejected too.
        if !(self.height > 0.0) {
            return Err(ValidationError::Height {
                height: self.height,
            });
        }
        if !(self.reach > 0.0) {
            return Err(ValidationError::Reach { reach: self.reach });
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::Age { age: self.age });
        }
        Ok(())
    }
}

/// What the store persists for one boxer. Weight class is deliberately absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxerRecord {
    pub id: BoxerId,
    pub name: String,
    pub weight: u32,
    pub height: f64,
    pub reach: f64,
    pub age: u32,
    pub fights: u32,
    pub wins: u32,
}

impl BoxerRecord {
    /// Fresh record with zeroed stats.
    pub fn from_new(id: BoxerId, boxer: NewBoxer) -> Self {
        Self {
            id,
            name: boxer.name,
            weight: boxer.weight,
            height: boxer.height,
            reach: boxer.reach,
            age: boxer.age,
            fights: 0,
            wins: 0,
        }
    }

    /// Apply one fight. Wins can never overtake fights.
    pub fn record_fight(&mut self, won: bool) {
        self.fights += 1;
        if won {
            self.wins += 1;
        }
    }
}

/// Win/loss counters (for display).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoxerStats {
    pub fights: u32,
    pub wins: u32,
}

impl BoxerStats {
    /// Fights not won. Zero if a hand-edited record claims more wins than fights.
    pub fn losses(&self) -> u32 {
        self.fights.saturating_sub(self.wins)
    }
}

/// A boxer as read back from the registry, weight class recomputed on every read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boxer {
    pub id: BoxerId,
    pub name: String,
    pub weight: u32,
    pub height: f64,
    pub reach: f64,
    pub age: u32,
    pub weight_class: WeightClass,
    pub stats: BoxerStats,
}

impl Boxer {
    pub fn from_record(record: BoxerRecord) -> Result<Self, ValidationError> {
        let weight_class = weight_class(record.weight)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            weight: record.weight,
            height: record.height,
            reach: record.reach,
            age: record.age,
            weight_class,
            stats: BoxerStats {
                fights: record.fights,
                wins: record.wins,
            },
        })
    }
}
