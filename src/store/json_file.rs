use crate::models::{BoxerId, BoxerRecord, NewBoxer};
use crate::store::{BoxerStore, MemoryStore, StoreError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Store backed by a JSON snapshot on disk.
///
/// Every mutation is applied to a copy, the copy is written to a sibling temp
/// file and renamed over the snapshot, and only then does it become visible.
/// A failed write leaves both the file and the in-memory state untouched.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the snapshot at `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = match fs::read_to_string(&path) {
            Ok(text) => {
                let mut inner: MemoryStore = serde_json::from_str(&text)?;
                inner.reindex();
                log::info!("Loaded {} boxer(s) from {}", inner.len(), path.display());
                inner
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No store at {}, starting empty", path.display());
                MemoryStore::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, next: MemoryStore) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&next)?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        self.inner = next;
        Ok(())
    }
}

impl BoxerStore for JsonFileStore {
    fn insert(&mut self, boxer: NewBoxer) -> Result<BoxerId, StoreError> {
        let mut next = self.inner.clone();
        let id = next.insert(boxer)?;
        self.commit(next)?;
        Ok(id)
    }

    fn remove(&mut self, id: BoxerId) -> Result<bool, StoreError> {
        let mut next = self.inner.clone();
        if !next.remove(id)? {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    fn get(&self, id: BoxerId) -> Result<Option<BoxerRecord>, StoreError> {
        self.inner.get(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, StoreError> {
        self.inner.find_by_name(name)
    }

    fn record_fight(&mut self, id: BoxerId, won: bool) -> Result<bool, StoreError> {
        let mut next = self.inner.clone();
        if !next.record_fight(id, won)? {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    fn all(&self) -> Result<Vec<BoxerRecord>, StoreError> {
        self.inner.all()
    }

    fn ping(&self) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let meta = fs::metadata(dir)?;
        if !meta.is_dir() {
            return Err(std::io::Error::new(
                ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            )
            .into());
        }
        Ok(())
    }
}
