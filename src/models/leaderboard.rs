//! Leaderboard rows and their ordering.

use crate::models::boxer::{BoxerId, WeightClass};
use crate::models::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering of the leaderboard. Both keys sort descending.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(SortKey::Wins),
            "win_pct" | "winPct" => Ok(SortKey::WinPct),
            other => Err(ValidationError::SortKey(other.to_string())),
        }
    }
}

/// Snapshot of one boxer who has fought at least once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: BoxerId,
    pub name: String,
    pub weight: u32,
    pub height: f64,
    pub reach: f64,
    pub age: u32,
    pub weight_class: WeightClass,
    pub fights: u32,
    pub wins: u32,
    /// Percentage rounded to one decimal place, for display only.
    pub win_pct: f64,
}

/// `wins / fights * 100` rounded to one decimal place, halves to even.
pub fn rounded_win_pct(wins: u32, fights: u32) -> f64 {
    let pct = wins as f64 / fights as f64 * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings_of_win_pct() {
        assert_eq!("wins".parse(), Ok(SortKey::Wins));
        assert_eq!("win_pct".parse(), Ok(SortKey::WinPct));
        assert_eq!("winPct".parse(), Ok(SortKey::WinPct));
        assert_eq!(
            "losses".parse::<SortKey>(),
            Err(ValidationError::SortKey("losses".into()))
        );
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(rounded_win_pct(8, 10), 80.0);
        assert_eq!(rounded_win_pct(9, 12), 75.0);
        assert_eq!(rounded_win_pct(2, 3), 66.7);
        assert_eq!(rounded_win_pct(1, 3), 33.3);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(rounded_win_pct(1, 16), 6.2);
        assert_eq!(rounded_win_pct(5, 16), 31.2);
        assert_eq!(rounded_win_pct(3, 16), 18.8);
    }
}
