//! The operations callers use: registry, one ring and its random source in one place.

use crate::logic::registry::Registry;
use crate::logic::ring::Ring;
use crate::models::{Bout, Boxer, BoxerId, LeaderboardEntry, NewBoxer, Result};
use crate::random::RandomSource;
use crate::store::BoxerStore;

/// A registry, one ring and the random source that decides its fights.
#[derive(Debug)]
pub struct Arena<S, R> {
    registry: Registry<S>,
    ring: Ring,
    random: R,
}

impl<S: BoxerStore, R: RandomSource> Arena<S, R> {
    /// Build an arena over `store` with an empty ring.
    pub fn new(store: S, random: R) -> Self {
        Self {
            registry: Registry::new(store),
            ring: Ring::new(),
            random,
        }
    }

    /// The registry behind the arena.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Mutable access to the registry, e.g. for roster imports.
    pub fn registry_mut(&mut self) -> &mut Registry<S> {
        &mut self.registry
    }

    /// The current ring.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Register a new boxer and return its id.
    pub fn create_competitor(&mut self, boxer: NewBoxer) -> Result<BoxerId> {
        self.registry.create(boxer)
    }

    /// Remove a boxer for good.
    pub fn delete_competitor(&mut self, id: BoxerId) -> Result<()> {
        self.registry.delete(id)
    }

    /// Read a boxer by id.
    pub fn get_competitor_by_id(&self, id: BoxerId) -> Result<Boxer> {
        self.registry.get_by_id(id)
    }

    /// Read a boxer by name.
    pub fn get_competitor_by_name(&self, name: &str) -> Result<Boxer> {
        self.registry.get_by_name(name)
    }

    /// Leaderboard for a sort key given as text (`wins` or `win_pct`).
    pub fn get_leaderboard(&self, sort_key: &str) -> Result<Vec<LeaderboardEntry>> {
        self.registry.leaderboard_by(sort_key)
    }

    /// Admit a boxer snapshot the caller already holds.
    pub fn admit_to_ring(&mut self, boxer: Boxer) -> Result<()> {
        self.ring.enter(boxer)
    }

    /// Look the boxer up by id and admit the current record.
    pub fn admit_by_id(&mut self, id: BoxerId) -> Result<()> {
        let boxer = self.registry.get_by_id(id)?;
        self.ring.enter(boxer)
    }

    /// Look the boxer up by name and admit the current record.
    pub fn admit_by_name(&mut self, name: &str) -> Result<()> {
        let boxer = self.registry.get_by_name(name)?;
        self.ring.enter(boxer)
    }

    /// Boxers in the ring, in admission order.
    pub fn get_ring_occupants(&self) -> &[Boxer] {
        log::info!(
            "Retrieving current boxers in the ring: {:?}",
            self.ring.boxers().iter().map(|b| &b.name).collect::<Vec<_>>()
        );
        self.ring.boxers()
    }

    /// Empty the ring without fighting.
    pub fn clear_ring(&mut self) {
        self.ring.clear();
    }

    /// Fight the two occupants and return the winner's name.
    pub fn run_match(&mut self) -> Result<String> {
        Ok(self.run_match_detailed()?.winner.name)
    }

    /// Fight the two occupants and return the full bout record.
    pub fn run_match_detailed(&mut self) -> Result<Bout> {
        self.ring.fight(&mut self.registry, &mut self.random)
    }

    /// Discard whatever a failed fight left in the ring and start over with a fresh one.
    pub fn reset_ring(&mut self) {
        log::info!("Replacing ring {}", self.ring.id());
        self.ring = Ring::new();
    }
}
