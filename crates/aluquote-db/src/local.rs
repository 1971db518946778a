//! # Local JSON Store
//!
//! The offline fallback backend: one JSON object file per entity kind
//! under a data directory.
//!
//! ## Layout
//! ```text
//! <data dir>/
//! ├── products.json      { "p1": {...}, "p2": {...} }
//! ├── customers.json
//! ├── documents.json     keyed by document number
//! ├── glasses.json
//! ├── styles.json
//! ├── colours.json
//! └── accessories.json
//! ```
//!
//! Each file is a single JSON object mapping key → record. Writes
//! rewrite the whole file; a `BTreeMap` keeps listing order stable and
//! matching the SQLite backend (ordered by key). A mutex serializes
//! writers so concurrent upserts can't interleave a read-modify-write.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::DbResult;
use crate::kv::{EntityKind, KvStore};

/// File-backed key-value store.
#[derive(Debug)]
pub struct LocalStore {
    dir: PathBuf,
    /// Guards the read-modify-write cycle of mutations.
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Opens (and creates, if needed) a local store in the given
    /// directory.
    pub async fn open(dir: impl Into<PathBuf>) -> DbResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), "Local store opened");
        Ok(LocalStore {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// The directory this store lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, kind: EntityKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Reads a kind's file into a map. A missing file is an empty map.
    async fn read_map(&self, kind: EntityKind) -> DbResult<BTreeMap<String, Value>> {
        let path = self.file_path(kind);
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_map(&self, kind: EntityKind, map: &BTreeMap<String, Value>) -> DbResult<()> {
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(self.file_path(kind), raw).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for LocalStore {
    async fn list(&self, kind: EntityKind) -> DbResult<Vec<Value>> {
        let map = self.read_map(kind).await?;
        Ok(map.into_values().collect())
    }

    async fn get(&self, kind: EntityKind, key: &str) -> DbResult<Option<Value>> {
        let mut map = self.read_map(kind).await?;
        Ok(map.remove(key))
    }

    async fn upsert(&self, kind: EntityKind, key: &str, record: &Value) -> DbResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map(kind).await?;
        map.insert(key.to_string(), record.clone());
        self.write_map(kind, &map).await?;
        debug!(kind = %kind, key = %key, "Upserted local record");
        Ok(())
    }

    async fn remove(&self, kind: EntityKind, key: &str) -> DbResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map(kind).await?;
        let removed = map.remove(key).is_some();
        if removed {
            self.write_map(kind, &map).await?;
        }
        debug!(kind = %kind, key = %key, removed, "Removed local record");
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        // The local store is healthy as long as its directory is there
        fs::metadata(&self.dir).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
