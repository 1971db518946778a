//! # aluquote-engine: Service Layer for AluQuote
//!
//! The orchestration layer between callers and the lower crates. Services
//! here fetch records, delegate every business decision to aluquote-core,
//! and write the results back through aluquote-db.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AluQuote Service Layer                            │
//! │                                                                         │
//! │  Caller (desktop shell, CLI, tests)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                aluquote-engine (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────────────┐ ┌────────────────┐ ┌──────────────────┐  │   │
//! │  │  │ DocumentService │ │ CatalogService │ │ CustomerService  │  │   │
//! │  │  │ CRUD, numbering │ │ products/glass │ │ CRUD             │  │   │
//! │  │  │ conversions,    │ │ styles/colours │ │                  │  │   │
//! │  │  │ balance payments│ │ accessories    │ │                  │  │   │
//! │  │  └─────────────────┘ └────────────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │  AppConfig: company identity, tax default, storage locations   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ pure decisions               │ persistence                     │
//! │       ▼                              ▼                                  │
//! │  aluquote-core                  aluquote-db (KvStore)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aluquote_engine::{AppConfig, DocumentService};
//!
//! let config = AppConfig::from_env();
//! let storage = Arc::new(config.open_storage().await?);
//! let documents = DocumentService::new(storage);
//!
//! let number = documents.next_number(DocumentType::Quotation).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod customers;
pub mod documents;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogService;
pub use config::AppConfig;
pub use customers::CustomerService;
pub use documents::DocumentService;
pub use error::{EngineError, EngineResult};
