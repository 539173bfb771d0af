//! Competitor registry: validation, identity, stats and the leaderboard.

use crate::logic::leaderboard::rank;
use crate::models::{
    Boxer, BoxerId, BoxerRecord, BoxingError, FightResult, LeaderboardEntry, Lookup, NewBoxer,
    Result, SortKey,
};
use crate::store::{BoxerStore, StoreError};

/// Single source of truth for boxers. Owns its store.
#[derive(Debug, Default)]
pub struct Registry<S> {
    store: S,
}

impl<S: BoxerStore> Registry<S> {
    /// Wrap a store. Nothing is read until the first call.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Register a new boxer (names are unique, surrounding whitespace is dropped).
    pub fn create(&mut self, mut boxer: NewBoxer) -> Result<BoxerId> {
        boxer.name = boxer.name.trim().to_string();
        log::info!("Creating boxer: {}", boxer.name);

        if let Err(e) = boxer.validate() {
            log::error!("Rejected boxer '{}': {}", boxer.name, e);
            return Err(e.into());
        }

        if self.store.find_by_name(&boxer.name)?.is_some() {
            log::warn!("Boxer with name '{}' already exists", boxer.name);
            return Err(BoxingError::Conflict { name: boxer.name });
        }

        let name = boxer.name.clone();
        match self.store.insert(boxer) {
            Ok(id) => {
                log::info!("Successfully created boxer: {} (id {})", name, id);
                Ok(id)
            }
            Err(StoreError::DuplicateName(name)) => {
                log::error!("Integrity error: Boxer '{}' already exists", name);
                Err(BoxingError::Conflict { name })
            }
            Err(e) => {
                log::error!("Store error while creating boxer '{}': {}", name, e);
                Err(e.into())
            }
        }
    }

    /// Remove a boxer. Its id is never handed out again.
    pub fn delete(&mut self, id: BoxerId) -> Result<()> {
        log::info!("Attempting to delete boxer with ID: {}", id);
        if !self.store.remove(id)? {
            log::warn!("Boxer with ID {} not found", id);
            return Err(BoxingError::NotFound(Lookup::Id(id)));
        }
        log::info!("Successfully deleted boxer with ID: {}", id);
        Ok(())
    }

    /// Read a boxer by id.
    pub fn get_by_id(&self, id: BoxerId) -> Result<Boxer> {
        log::info!("Retrieving boxer by ID: {}", id);
        let record = self.store.get(id)?;
        self.found(record, Lookup::Id(id))
    }

    /// Look a boxer up by name. Surrounding whitespace is dropped, as in `create`.
    pub fn get_by_name(&self, name: &str) -> Result<Boxer> {
        let name = name.trim();
        log::info!("Retrieving boxer by name: {}", name);
        let record = self.store.find_by_name(name)?;
        self.found(record, Lookup::Name(name.to_string()))
    }

    fn found(&self, record: Option<BoxerRecord>, lookup: Lookup) -> Result<Boxer> {
        match record {
            Some(record) => Ok(Boxer::from_record(record)?),
            None => {
                log::warn!("{}", lookup);
                Err(BoxingError::NotFound(lookup))
            }
        }
    }

    /// Add one fight to the boxer's record, and one win if `result` is a win.
    pub fn record_result(&mut self, id: BoxerId, result: FightResult) -> Result<()> {
        log::info!(
            "Updating boxer stats for ID {} with result '{}'",
            id,
            result.as_str()
        );
        let won = result == FightResult::Win;
        if !self.store.record_fight(id, won)? {
            log::warn!("Boxer with ID {} not found for stats update", id);
            return Err(BoxingError::NotFound(Lookup::Id(id)));
        }
        log::info!("Boxer stats updated for ID {}", id);
        Ok(())
    }

    /// Same as [`Registry::record_result`] for a result spelled `"win"` or `"loss"`.
    pub fn record_result_named(&mut self, id: BoxerId, result: &str) -> Result<()> {
        let result = result.parse::<FightResult>().map_err(|e| {
            log::error!("Invalid result value: {}", result);
            BoxingError::from(e)
        })?;
        self.record_result(id, result)
    }

    /// Boxers with at least one fight, best first.
    pub fn leaderboard(&self, sort: SortKey) -> Result<Vec<LeaderboardEntry>> {
        log::info!("Generating leaderboard sorted by {:?}", sort);
        let entries = rank(self.store.all()?, sort)?;
        log::info!(
            "Successfully generated leaderboard with {} entries",
            entries.len()
        );
        Ok(entries)
    }

    /// Leaderboard for a sort key given as text. An unknown key yields no rows at all.
    pub fn leaderboard_by(&self, sort_key: &str) -> Result<Vec<LeaderboardEntry>> {
        let sort = sort_key.parse::<SortKey>().map_err(|e| {
            log::error!("Invalid sort_by parameter: {}", sort_key);
            BoxingError::from(e)
        })?;
        self.leaderboard(sort)
    }

    /// Ask the store whether it can still serve requests.
    pub fn health_check(&self) -> Result<()> {
        log::info!("Checking store health");
        self.store.ping().map_err(|e| {
            log::error!("Store health check failed: {}", e);
            BoxingError::from(e)
        })?;
        log::info!("Store is healthy.");
        Ok(())
    }
}
