//! # Storage Mode Routing
//!
//! Explicit routing between the SQLite database and the local JSON
//! fallback.
//!
//! ## Mode Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Resolution                                 │
//! │                                                                         │
//! │  preference (config / user toggle)                                     │
//! │       │                                                                 │
//! │       ├── Local    ────────────────────────────► mode = Local          │
//! │       │                                                                 │
//! │       └── Database ──► database health_check()                         │
//! │                              │                                          │
//! │                              ├── ok   ──────────► mode = Database      │
//! │                              └── fail ── warn ──► mode = Local         │
//! │                                                                         │
//! │  The mode is resolved HERE and only here: at startup and after a       │
//! │  user toggle. Individual operations route by the resolved mode and     │
//! │  surface failures as errors instead of silently switching backends.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{DbError, DbResult};
use crate::kv::{EntityKind, KvStore};
use crate::local::LocalStore;
use crate::pool::Database;

// =============================================================================
// Storage Mode
// =============================================================================

/// Which backend serves persistence calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// The SQLite database (durable backend).
    Database,
    /// The local JSON file cache (offline fallback).
    Local,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Database => write!(f, "database"),
            StorageMode::Local => write!(f, "local"),
        }
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Owns both backends and the resolved mode.
///
/// Services hold this behind an `Arc<dyn KvStore>` (or `Arc<Storage>`
/// when they need [`Storage::set_mode`]) and never learn which backend
/// answered.
pub struct Storage {
    database: Option<Database>,
    local: LocalStore,
    mode: RwLock<StorageMode>,
}

impl Storage {
    /// Creates a storage router over an optional database and the local
    /// fallback, then resolves the initial mode from the preference.
    pub async fn new(
        database: Option<Database>,
        local: LocalStore,
        preference: StorageMode,
    ) -> Self {
        let storage = Storage {
            database,
            local,
            mode: RwLock::new(StorageMode::Local),
        };
        storage.resolve(preference).await;
        storage
    }

    /// The currently resolved mode.
    pub async fn mode(&self) -> StorageMode {
        *self.mode.read().await
    }

    /// Re-resolves the mode after a user toggle.
    ///
    /// Asking for Database mode without a healthy database falls back to
    /// Local with a warning; it never errors.
    pub async fn set_mode(&self, preference: StorageMode) -> StorageMode {
        self.resolve(preference).await
    }

    async fn resolve(&self, preference: StorageMode) -> StorageMode {
        let resolved = match (preference, &self.database) {
            (StorageMode::Local, _) => StorageMode::Local,
            (StorageMode::Database, None) => {
                warn!("Database mode requested but no database configured, using local store");
                StorageMode::Local
            }
            (StorageMode::Database, Some(db)) => {
                if db.health_check().await {
                    StorageMode::Database
                } else {
                    warn!("Database health check failed, using local store");
                    StorageMode::Local
                }
            }
        };

        *self.mode.write().await = resolved;
        info!(mode = %resolved, "Storage mode resolved");
        resolved
    }

    /// The active backend for the current mode.
    async fn active(&self) -> DbResult<&dyn KvStore> {
        match *self.mode.read().await {
            StorageMode::Local => Ok(&self.local),
            StorageMode::Database => match &self.database {
                Some(db) => Ok(db),
                // Resolution never selects Database without one, but a
                // caller could race a toggle; fail loudly rather than
                // write to the wrong backend.
                None => Err(DbError::ConnectionFailed(
                    "database mode active without a database".to_string(),
                )),
            },
        }
    }
}

#[async_trait]
impl KvStore for Storage {
    async fn list(&self, kind: EntityKind) -> DbResult<Vec<Value>> {
        self.active().await?.list(kind).await
    }

    async fn get(&self, kind: EntityKind, key: &str) -> DbResult<Option<Value>> {
        self.active().await?.get(kind, key).await
    }

    async fn upsert(&self, kind: EntityKind, key: &str, record: &Value) -> DbResult<()> {
        self.active().await?.upsert(kind, key, record).await
    }

    async fn remove(&self, kind: EntityKind, key: &str) -> DbResult<bool> {
        self.active().await?.remove(kind, key).await
    }

    async fn health_check(&self) -> bool {
        match self.active().await {
            Ok(store) => store.health_check().await,
            Err(_) => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
