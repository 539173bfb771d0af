//! Ranking of boxers who have fought.

use crate::models::{
    rounded_win_pct, weight_class, BoxerRecord, LeaderboardEntry, SortKey, ValidationError,
};

/// Drop boxers without fights, order the rest by `sort` (descending) and snapshot them.
///
/// Win percentage is compared on the raw `wins / fights` ratio, not on the rounded
/// value, so two close ratios never swap places. Ties keep store (id) order.
pub fn rank(
    records: Vec<BoxerRecord>,
    sort: SortKey,
) -> Result<Vec<LeaderboardEntry>, ValidationError> {
    let mut fought: Vec<BoxerRecord> = records.into_iter().filter(|r| r.fights > 0).collect();

    match sort {
        SortKey::Wins => fought.sort_by(|a, b| b.wins.cmp(&a.wins)),
        SortKey::WinPct => fought.sort_by(|a, b| ratio(b).total_cmp(&ratio(a))),
    }

    fought
        .into_iter()
        .map(|r| -> Result<LeaderboardEntry, ValidationError> {
            Ok(LeaderboardEntry {
                weight_class: weight_class(r.weight)?,
                win_pct: rounded_win_pct(r.wins, r.fights),
                id: r.id,
                name: r.name,
                weight: r.weight,
                height: r.height,
                reach: r.reach,
                age: r.age,
                fights: r.fights,
                wins: r.wins,
            })
        })
        .collect()
}

fn ratio(r: &BoxerRecord) -> f64 {
    r.wins as f64 / r.fights as f64
}
