//! Errors reported by the registry, the ring and their collaborators.

use crate::models::boxer::{BoxerId, MAX_AGE, MIN_AGE, MIN_WEIGHT};
use crate::random::RandomError;
use crate::store::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoxingError>;

/// Malformed input. Always the caller's to fix.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid name: must not be empty.")]
    EmptyName,
    #[error("Invalid weight: {weight}. Must be at least {}.", MIN_WEIGHT)]
    Weight { weight: u32 },
    #[error("Invalid height: {height}. Must be greater than 0.")]
    Height { height: f64 },
    #[error("Invalid reach: {reach}. Must be greater than 0.")]
    Reach { reach: f64 },
    #[error("Invalid age: {age}. Must be between {} and {}.", MIN_AGE, MAX_AGE)]
    Age { age: u32 },
    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    FightResult(String),
    #[error("Invalid sort_by parameter: {0}")]
    SortKey(String),
}

/// How a missing boxer was looked up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lookup {
    Id(BoxerId),
    Name(String),
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "Boxer with ID {} not found.", id),
            Lookup::Name(name) => write!(f, "Boxer '{}' not found.", name),
        }
    }
}

#[derive(Debug, Error)]
pub enum BoxingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(Lookup),

    #[error("Boxer with name '{name}' already exists")]
    Conflict { name: String },

    /// Ring already holds two boxers.
    #[error("Ring is full, cannot add more boxers.")]
    RingFull,

    /// Fight requested before both corners are filled.
    #[error("There must be two boxers to start a fight (found {present}).")]
    InsufficientBoxers { present: usize },

    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    #[error("random source failure: {0}")]
    Random(#[from] RandomError),
}

impl BoxingError {
    /// True for failures of an injected collaborator rather than of the request itself.
    pub fn is_dependency(&self) -> bool {
        matches!(self, BoxingError::Store(_) | BoxingError::Random(_))
    }
}
