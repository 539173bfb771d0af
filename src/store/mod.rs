//! Durable keyed storage for boxer records.
//!
//! Implementations own uniqueness of names: `insert` must refuse a second
//! record with an existing name even if the caller already checked.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{BoxerId, BoxerRecord, NewBoxer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness constraint on `name` rejected an insert.
    #[error("name '{0}' is already taken")]
    DuplicateName(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait BoxerStore {
    /// Persist a new record with zeroed stats and return its id.
    fn insert(&mut self, boxer: NewBoxer) -> Result<BoxerId, StoreError>;

    /// Delete permanently. `false` if there was nothing to delete.
    fn remove(&mut self, id: BoxerId) -> Result<bool, StoreError>;

    fn get(&self, id: BoxerId) -> Result<Option<BoxerRecord>, StoreError>;

    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, StoreError>;

    /// Increment fights, and wins when `won`, in one step. `false` if the id is absent.
    fn record_fight(&mut self, id: BoxerId, won: bool) -> Result<bool, StoreError>;

    /// Every record in id order.
    fn all(&self) -> Result<Vec<BoxerRecord>, StoreError>;

    /// Cheap reachability check.
    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
