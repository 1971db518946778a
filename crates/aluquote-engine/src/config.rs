//! # Application Configuration
//!
//! Deployment settings for the engine: business identity, tax default and
//! storage locations.
//!
//! ## Sources
//! ```text
//! AppConfig::default()  ──►  sensible single-shop defaults
//! AppConfig::from_env() ──►  defaults overridden by ALUQUOTE_* variables
//! ```
//!
//! ## Environment Variables
//! | Variable                  | Meaning                                |
//! |---------------------------|----------------------------------------|
//! | ALUQUOTE_COMPANY_NAME     | Business name printed on documents     |
//! | ALUQUOTE_CURRENCY         | Currency symbol/code (default "SCR")   |
//! | ALUQUOTE_TAX_RATE         | Default tax rate percent               |
//! | ALUQUOTE_STORAGE          | Storage preference: database | local   |
//! | ALUQUOTE_DB_PATH          | SQLite database file path              |
//! | ALUQUOTE_DATA_DIR         | Local JSON store directory             |

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use aluquote_core::DEFAULT_TAX_RATE;
use aluquote_db::{Database, DbConfig, LocalStore, Storage, StorageMode};

use crate::error::EngineResult;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Business name printed on documents.
    pub company_name: String,

    /// Currency symbol or ISO code shown alongside amounts.
    pub currency: String,

    /// Default tax rate percent for new documents.
    pub default_tax_rate: f64,

    /// Preferred storage backend. The actual mode is resolved against
    /// database health at startup.
    pub storage: StorageMode,

    /// SQLite database file path.
    pub database_path: PathBuf,

    /// Directory for the local JSON fallback store.
    pub local_data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            company_name: "AluQuote".to_string(),
            currency: "SCR".to_string(),
            default_tax_rate: DEFAULT_TAX_RATE,
            storage: StorageMode::Database,
            database_path: PathBuf::from("./aluquote.db"),
            local_data_dir: PathBuf::from("./data"),
        }
    }
}

impl AppConfig {
    /// Builds a configuration from the environment, falling back to
    /// defaults for anything unset.
    ///
    /// Unparsable values are ignored with a warning rather than aborting
    /// startup.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(name) = env::var("ALUQUOTE_COMPANY_NAME") {
            config.company_name = name;
        }
        if let Ok(currency) = env::var("ALUQUOTE_CURRENCY") {
            config.currency = currency;
        }
        if let Ok(raw) = env::var("ALUQUOTE_TAX_RATE") {
            match raw.parse::<f64>() {
                Ok(rate) if (0.0..=100.0).contains(&rate) => config.default_tax_rate = rate,
                _ => warn!(value = %raw, "Ignoring invalid ALUQUOTE_TAX_RATE"),
            }
        }
        if let Ok(raw) = env::var("ALUQUOTE_STORAGE") {
            match raw.to_lowercase().as_str() {
                "database" => config.storage = StorageMode::Database,
                "local" => config.storage = StorageMode::Local,
                _ => warn!(value = %raw, "Ignoring invalid ALUQUOTE_STORAGE"),
            }
        }
        if let Ok(path) = env::var("ALUQUOTE_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("ALUQUOTE_DATA_DIR") {
            config.local_data_dir = PathBuf::from(dir);
        }

        config
    }

    /// Opens the storage router this configuration describes.
    ///
    /// A database that fails to open is not fatal: the router starts in
    /// local mode and the warning explains why.
    pub async fn open_storage(&self) -> EngineResult<Storage> {
        let database = match Database::new(DbConfig::new(&self.database_path)).await {
            Ok(db) => Some(db),
            Err(err) => {
                warn!(error = %err, "Database unavailable, continuing with local store only");
                None
            }
        };

        let local = LocalStore::open(&self.local_data_dir).await?;
        let storage = Storage::new(database, local, self.storage).await;

        info!(
            company = %self.company_name,
            mode = %storage.mode().await,
            "Storage opened"
        );
        Ok(storage)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.currency, "SCR");
        assert_eq!(config.default_tax_rate, 15.0);
        assert_eq!(config.storage, StorageMode::Database);
    }

    #[tokio::test]
    async fn test_open_storage_local_preference() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageMode::Local,
            database_path: dir.path().join("aluquote.db"),
            local_data_dir: dir.path().join("data"),
            ..AppConfig::default()
        };

        let storage = config.open_storage().await.unwrap();
        assert_eq!(storage.mode().await, StorageMode::Local);
    }

    #[tokio::test]
    async fn test_open_storage_database_preference() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageMode::Database,
            database_path: dir.path().join("aluquote.db"),
            local_data_dir: dir.path().join("data"),
            ..AppConfig::default()
        };

        let storage = config.open_storage().await.unwrap();
        assert_eq!(storage.mode().await, StorageMode::Database);
    }
}
