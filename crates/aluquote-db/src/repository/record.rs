//! # Record Repository
//!
//! CRUD over the `records` table, the single table behind the SQLite
//! key-value store.
//!
//! ## Schema
//! ```text
//! records(kind TEXT, key TEXT, record TEXT, updated_at TEXT,
//!         PRIMARY KEY (kind, key))
//! ```
//!
//! Records go in and out as `serde_json::Value`; typed decoding is the
//! engine's business. Queries are bound at runtime so the crate builds
//! without a prepared database.

use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::kv::EntityKind;

/// Repository for the `records` table.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        RecordRepository { pool }
    }

    /// Lists every record of a kind, ordered by key.
    pub async fn list(&self, kind: EntityKind) -> DbResult<Vec<Value>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT record FROM records WHERE kind = ?1 ORDER BY key")
                .bind(kind.as_str())
                .fetch_all(&self.pool)
                .await?;

        debug!(kind = %kind, count = rows.len(), "Listed records");

        rows.iter()
            .map(|raw| serde_json::from_str(raw).map_err(Into::into))
            .collect()
    }

    /// Fetches one record by key.
    pub async fn get(&self, kind: EntityKind, key: &str) -> DbResult<Option<Value>> {
        let raw: Option<String> =
            sqlx::query_scalar("SELECT record FROM records WHERE kind = ?1 AND key = ?2")
                .bind(kind.as_str())
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Creates or replaces the record at (kind, key).
    pub async fn upsert(&self, kind: EntityKind, key: &str, record: &Value) -> DbResult<()> {
        let payload = serde_json::to_string(record)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO records (kind, key, record, updated_at) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT (kind, key) DO UPDATE SET \
                 record = excluded.record, \
                 updated_at = excluded.updated_at",
        )
        .bind(kind.as_str())
        .bind(key)
        .bind(payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(kind = %kind, key = %key, "Upserted record");
        Ok(())
    }

    /// Deletes the record at (kind, key). Returns false when absent.
    pub async fn remove(&self, kind: EntityKind, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM records WHERE kind = ?1 AND key = ?2")
            .bind(kind.as_str())
            .bind(key)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        debug!(kind = %kind, key = %key, removed, "Removed record");
        Ok(removed)
    }

    /// Counts records of a kind (used by the seed binary).
    pub async fn count(&self, kind: EntityKind) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records WHERE kind = ?1")
            .bind(kind.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use serde_json::json;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_upsert_and_get_roundtrip() {
        let db = test_db().await;
        let repo = db.records();

        let record = json!({"id": "p1", "name": "Sliding Window", "pricePerSqm": 120.0});
        repo.upsert(EntityKind::Product, "p1", &record).await.unwrap();

        let loaded = repo.get(EntityKind::Product, "p1").await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_record() {
        let db = test_db().await;
        let repo = db.records();

        repo.upsert(EntityKind::Glass, "g1", &json!({"name": "Clear"}))
            .await
            .unwrap();
        repo.upsert(EntityKind::Glass, "g1", &json!({"name": "Tinted"}))
            .await
            .unwrap();

        let all = repo.list(EntityKind::Glass).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["name"], "Tinted");
    }

    #[tokio::test]
    async fn test_kinds_are_isolated_namespaces() {
        let db = test_db().await;
        let repo = db.records();

        repo.upsert(EntityKind::Style, "x", &json!({"kind": "style"}))
            .await
            .unwrap();
        repo.upsert(EntityKind::Colour, "x", &json!({"kind": "colour"}))
            .await
            .unwrap();

        assert_eq!(repo.list(EntityKind::Style).await.unwrap().len(), 1);
        assert_eq!(repo.list(EntityKind::Colour).await.unwrap().len(), 1);

        assert!(repo.remove(EntityKind::Style, "x").await.unwrap());
        assert_eq!(repo.list(EntityKind::Style).await.unwrap().len(), 0);
        assert_eq!(repo.list(EntityKind::Colour).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_returns_false() {
        let db = test_db().await;
        let removed = db
            .records()
            .remove(EntityKind::Document, "QT-404")
            .await
            .unwrap();
        assert!(!removed);
    }

    #[tokio::test]
    async fn test_list_orders_by_key() {
        let db = test_db().await;
        let repo = db.records();

        for key in ["QT-003", "QT-001", "QT-002"] {
            repo.upsert(EntityKind::Document, key, &json!({"documentNumber": key}))
                .await
                .unwrap();
        }

        let all = repo.list(EntityKind::Document).await.unwrap();
        let numbers: Vec<&str> = all
            .iter()
            .map(|d| d["documentNumber"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["QT-001", "QT-002", "QT-003"]);
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let repo = db.records();
        assert_eq!(repo.count(EntityKind::Accessory).await.unwrap(), 0);
        repo.upsert(EntityKind::Accessory, "a1", &json!({}))
            .await
            .unwrap();
        assert_eq!(repo.count(EntityKind::Accessory).await.unwrap(), 1);
    }
}
