use crate::models::{BoxerId, BoxerRecord, NewBoxer};
use crate::store::{BoxerStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// In-process store: records by id plus a name index that enforces uniqueness.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: BoxerId,
    records: BTreeMap<BoxerId, BoxerRecord>,
    #[serde(skip)]
    names: HashMap<String, BoxerId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the name index after deserializing.
    pub(crate) fn reindex(&mut self) {
        self.names = self
            .records
            .values()
            .map(|r| (r.name.clone(), r.id))
            .collect();
        let max_id = self.records.keys().next_back().copied().unwrap_or(0);
        self.next_id = self.next_id.max(max_id);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl BoxerStore for MemoryStore {
    fn insert(&mut self, boxer: NewBoxer) -> Result<BoxerId, StoreError> {
        if self.names.contains_key(&boxer.name) {
            return Err(StoreError::DuplicateName(boxer.name));
        }
        self.next_id += 1;
        let id = self.next_id;
        self.names.insert(boxer.name.clone(), id);
        self.records.insert(id, BoxerRecord::from_new(id, boxer));
        Ok(id)
    }

    fn remove(&mut self, id: BoxerId) -> Result<bool, StoreError> {
        match self.records.remove(&id) {
            Some(record) => {
                self.names.remove(&record.name);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get(&self, id: BoxerId) -> Result<Option<BoxerRecord>, StoreError> {
        Ok(self.records.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, StoreError> {
        Ok(self
            .names
            .get(name)
            .and_then(|id| self.records.get(id))
            .cloned())
    }

    fn record_fight(&mut self, id: BoxerId, won: bool) -> Result<bool, StoreError> {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.record_fight(won);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn all(&self) -> Result<Vec<BoxerRecord>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }
}
