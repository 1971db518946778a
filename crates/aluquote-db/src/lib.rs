//! # aluquote-db: Persistence Layer for AluQuote
//!
//! This crate provides persistence for the AluQuote system: a SQLite
//! key-value store for durable data and a JSON-file local store as the
//! offline fallback, with explicit mode routing between them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AluQuote Data Flow                               │
//! │                                                                         │
//! │  Engine service (DocumentService::save)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   aluquote-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │   │
//! │  │   │   Storage    │──►│   Database   │   │    LocalStore    │  │   │
//! │  │   │ (mode router)│   │  (pool.rs)   │   │   (local.rs)     │  │   │
//! │  │   │              │──►│              │   │                  │  │   │
//! │  │   │ Database     │   │ SqlitePool   │   │ one JSON file    │  │   │
//! │  │   │   | Local    │   │ records table│   │ per entity kind  │  │   │
//! │  │   └──────────────┘   └──────────────┘   └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aluquote.db (SQLite, WAL)  /  <data dir>/*.json                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KvStore` trait and entity kind namespaces
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - The records repository
//! - [`local`] - JSON-file fallback store
//! - [`storage`] - Storage mode resolution and routing
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aluquote_db::{Database, DbConfig, EntityKind, KvStore, LocalStore, Storage, StorageMode};
//!
//! let db = Database::new(DbConfig::new("path/to/aluquote.db")).await?;
//! let local = LocalStore::open("path/to/data").await?;
//! let storage = Storage::new(Some(db), local, StorageMode::Database).await;
//!
//! let documents = storage.list(EntityKind::Document).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod local;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use kv::{EntityKind, KvStore};
pub use local::LocalStore;
pub use pool::{Database, DbConfig};
pub use storage::{Storage, StorageMode};

// Repository re-export for convenience
pub use repository::record::RecordRepository;
