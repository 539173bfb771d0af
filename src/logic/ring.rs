//! The ring: two corners, a skill heuristic, and one random draw per fight.
//!
//! A `Ring` has no internal locking. Share one between threads only behind a
//! `Mutex` (one lock per ring); independent rings can run side by side.

use crate::logic::registry::Registry;
use crate::models::{Bout, Boxer, BoxingError, FightResult, Result};
use crate::random::RandomSource;
use crate::store::BoxerStore;
use chrono::Utc;
use uuid::Uuid;

/// Boxers a ring holds at most.
pub const RING_CAPACITY: usize = 2;

/// Skill points for one boxer: `weight * name length + reach / 10 + age modifier`.
///
/// Under 25 costs a point, over 35 costs two. Name length counts characters.
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age < 25 {
        -1.0
    } else if boxer.age > 35 {
        -2.0
    } else {
        0.0
    };
    let skill =
        boxer.weight as f64 * boxer.name.chars().count() as f64 + boxer.reach / 10.0 + age_modifier;
    log::debug!("Calculated skill for {}: {}", boxer.name, skill);
    skill
}

/// Logistic transform of the absolute skill gap. Always in [0.5, 1.0].
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}

/// Transient match state. Occupants are snapshots taken at admission.
#[derive(Clone, Debug)]
pub struct Ring {
    id: Uuid,
    corners: Vec<Boxer>,
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

impl Ring {
    /// An empty ring with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            corners: Vec::with_capacity(RING_CAPACITY),
        }
    }

    /// Id used to tell rings apart in the logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Occupants in admission order.
    pub fn boxers(&self) -> &[Boxer] {
        &self.corners
    }

    /// Number of boxers currently in the ring.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// True once both corners are taken.
    pub fn is_full(&self) -> bool {
        self.corners.len() >= RING_CAPACITY
    }

    /// Put a boxer in the next free corner. A full ring is left as it was.
    pub fn enter(&mut self, boxer: Boxer) -> Result<()> {
        if self.is_full() {
            log::warn!("Ring {}: full, cannot add {}", self.id, boxer.name);
            return Err(BoxingError::RingFull);
        }
        log::info!("Ring {}: adding boxer {}", self.id, boxer.name);
        self.corners.push(boxer);
        Ok(())
    }

    /// Empty the ring. Clearing an empty ring is only worth a warning.
    pub fn clear(&mut self) {
        if self.corners.is_empty() {
            log::warn!("Ring {}: tried to clear an already empty ring", self.id);
            return;
        }
        log::info!("Ring {}: clearing", self.id);
        self.corners.clear();
    }

    /// Fight the two occupants, record the result and empty the ring.
    ///
    /// The returned `Bout` carries both boxers as stored after the stats update.
    ///
    /// If the draw is below the threshold the boxer admitted first wins, otherwise
    /// the second does; which of them has the higher skill is not consulted.
    ///
    /// With fewer than two occupants nothing is touched and the random source is
    /// not consulted. If the random source or a stats update fails, the error is
    /// returned as is and the ring keeps its occupants; a win may already have been
    /// recorded, so the caller has to decide how to recover.
    pub fn fight<S, R>(&mut self, registry: &mut Registry<S>, random: &mut R) -> Result<Bout>
    where
        S: BoxerStore,
        R: RandomSource + ?Sized,
    {
        let (first, second) = match self.corners.as_slice() {
            [first, second] => (first.clone(), second.clone()),
            other => {
                log::error!(
                    "Ring {}: attempted to fight with {} boxer(s) in the ring",
                    self.id,
                    other.len()
                );
                return Err(BoxingError::InsufficientBoxers {
                    present: other.len(),
                });
            }
        };
        log::info!(
            "Ring {}: starting fight between {} and {}",
            self.id,
            first.name,
            second.name
        );

        let skill_1 = fighting_skill(&first);
        let skill_2 = fighting_skill(&second);
        let threshold = win_probability(skill_1, skill_2);

        let draw = random.next_fraction().map_err(|e| {
            log::error!("Ring {}: random source failed: {}", self.id, e);
            BoxingError::from(e)
        })?;
        log::debug!("Random number received: {}, threshold: {}", draw, threshold);

        let (winner, loser) = if draw < threshold {
            (first, second)
        } else {
            (second, first)
        };
        log::info!("Winner: {}, Loser: {}", winner.name, loser.name);

        registry.record_result(winner.id, FightResult::Win)?;
        registry.record_result(loser.id, FightResult::Loss)?;
        log::info!(
            "Updated stats for winner {} and loser {}",
            winner.name,
            loser.name
        );

        let winner = registry.get_by_id(winner.id)?;
        let loser = registry.get_by_id(loser.id)?;

        self.clear();
        Ok(Bout {
            id: Uuid::new_v4(),
            winner,
            loser,
            skill_1,
            skill_2,
            threshold,
            draw,
            fought_at: Utc::now(),
        })
    }
}
