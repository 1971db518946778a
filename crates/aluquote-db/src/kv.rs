//! # Key-Value Store Abstraction
//!
//! The persistence surface every backend implements.
//!
//! ## The Interface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         KvStore                                         │
//! │                                                                         │
//! │   list(kind)                ──► every record of that kind              │
//! │   get(kind, key)            ──► one record, if present                 │
//! │   upsert(kind, key, record) ──► create-or-replace                      │
//! │   remove(kind, key)         ──► true if something was deleted          │
//! │   health_check()            ──► is this backend reachable?             │
//! │                                                                         │
//! │   Implementations:                                                      │
//! │   • Database  - SQLite records table (durable backend)                 │
//! │   • LocalStore - JSON files (offline fallback)                         │
//! │   • Storage   - routes to one of the above by resolved mode            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records cross this boundary as `serde_json::Value`; the typed
//! (de)serialization happens in the engine services, which keeps the
//! store oblivious to domain schema changes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DbResult;

// =============================================================================
// Entity Kinds
// =============================================================================

/// The namespaces of the key-value store.
///
/// Documents are keyed by their business number (`QT-001`); every other
/// kind is keyed by its `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Customer,
    Document,
    Glass,
    Style,
    Colour,
    Accessory,
}

impl EntityKind {
    /// All kinds, in listing order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Product,
        EntityKind::Customer,
        EntityKind::Document,
        EntityKind::Glass,
        EntityKind::Style,
        EntityKind::Colour,
        EntityKind::Accessory,
    ];

    /// Namespace string used in the records table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Customer => "customer",
            EntityKind::Document => "document",
            EntityKind::Glass => "glass",
            EntityKind::Style => "style",
            EntityKind::Colour => "colour",
            EntityKind::Accessory => "accessory",
        }
    }

    /// File name used by the local JSON store.
    pub const fn file_name(&self) -> &'static str {
        match self {
            EntityKind::Product => "products.json",
            EntityKind::Customer => "customers.json",
            EntityKind::Document => "documents.json",
            EntityKind::Glass => "glasses.json",
            EntityKind::Style => "styles.json",
            EntityKind::Colour => "colours.json",
            EntityKind::Accessory => "accessories.json",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Asynchronous key-value persistence.
///
/// Object safe so services can hold an `Arc<dyn KvStore>` and stay
/// ignorant of which backend is active.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns every record of the given kind.
    async fn list(&self, kind: EntityKind) -> DbResult<Vec<Value>>;

    /// Returns one record by key, if present.
    async fn get(&self, kind: EntityKind, key: &str) -> DbResult<Option<Value>>;

    /// Creates or replaces the record at (kind, key).
    async fn upsert(&self, kind: EntityKind, key: &str, record: &Value) -> DbResult<()>;

    /// Deletes the record at (kind, key). Returns false when it was
    /// not there to begin with.
    async fn remove(&self, kind: EntityKind, key: &str) -> DbResult<bool>;

    /// Whether this backend can currently serve requests.
    async fn health_check(&self) -> bool;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_namespaces_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::ALL {
            assert!(seen.insert(kind.as_str()));
            assert!(seen.insert(kind.file_name()));
        }
    }

    #[test]
    fn test_kind_serde_uses_namespace_strings() {
        let json = serde_json::to_string(&EntityKind::Colour).unwrap();
        assert_eq!(json, "\"colour\"");
        let kind: EntityKind = serde_json::from_str("\"document\"").unwrap();
        assert_eq!(kind, EntityKind::Document);
    }
}
