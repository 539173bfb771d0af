//! Bulk registration from a CSV roster with header `name,weight,height,reach,age`.

use crate::logic::Registry;
use crate::models::{BoxerId, BoxingError, NewBoxer};
use crate::store::BoxerStore;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Row numbers count data rows from 1, header excluded.
    #[error("row {row}: {source}")]
    Row { row: usize, source: BoxingError },
}

/// Parse every row. Nothing is registered here.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<NewBoxer>, RosterError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let rows = csv
        .deserialize::<NewBoxer>()
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Read {} roster row(s)", rows.len());
    Ok(rows)
}

impl<S: BoxerStore> Registry<S> {
    /// Create each boxer in order, stopping at the first row that fails.
    /// Rows before the failing one stay registered.
    pub fn import_roster(
        &mut self,
        rows: impl IntoIterator<Item = NewBoxer>,
    ) -> Result<Vec<BoxerId>, RosterError> {
        let mut ids = Vec::new();
        for (i, boxer) in rows.into_iter().enumerate() {
            let id = self
                .create(boxer)
                .map_err(|source| RosterError::Row { row: i + 1, source })?;
            ids.push(id);
        }
        log::info!("Imported {} boxer(s)", ids.len());
        Ok(ids)
    }
}
