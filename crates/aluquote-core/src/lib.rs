//! # aluquote-core: Pure Business Logic for AluQuote
//!
//! This crate is the **heart** of AluQuote, a quotation/invoice/receipt
//! system for an aluminum windows and doors business. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AluQuote Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend / Callers                         │   │
//! │  │    Catalog UI ──► Document Form ──► Preview ──► Payments       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  aluquote-engine (services)                     │   │
//! │  │    DocumentService, CatalogService, CustomerService            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aluquote-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌───────────────────┐  │   │
//! │  │   │  types  │ │ pricing │ │ numbering │ │     lifecycle     │  │   │
//! │  │   │Document │ │ totals  │ │  QT-001   │ │ convert / balance │  │   │
//! │  │   │LineItem │ │ tax calc│ │ scanning  │ │     payments      │  │   │
//! │  │   └─────────┘ └─────────┘ └───────────┘ └───────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aluquote-db (persistence layer)                 │   │
//! │  │           SQLite key-value store, local JSON fallback           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Document, LineItem, catalog records, ...)
//! - [`money`] - Float rounding/comparison at the cent boundary
//! - [`pricing`] - Pure pricing calculator (tax-inclusive totals)
//! - [`numbering`] - Scan-based document numbering (QT-001, ...)
//! - [`builder`] - Line item composition from catalog selections
//! - [`lifecycle`] - Quotation → invoice/receipt transitions, balance payments
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - dates are
//!    passed in, never read from the clock
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Snapshot Data**: Documents embed frozen copies of catalog records
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use aluquote_core::numbering::next_number;
//! use aluquote_core::types::DocumentType;
//!
//! // With no invoices yet, numbering starts at 001
//! let number = next_number(&[], DocumentType::Invoice);
//! assert_eq!(number, "INV-001");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod lifecycle;
pub mod money;
pub mod numbering;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aluquote_core::Document` instead of
// `use aluquote_core::types::Document`

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use pricing::DocumentTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate percentage applied to new documents.
///
/// ## Why a constant?
/// The business operates under a single 15% VAT regime. The engine config
/// can override it per deployment; this is the fallback.
pub const DEFAULT_TAX_RATE: f64 = 15.0;

/// Square millimeters per square meter.
///
/// Dimensions are entered in millimeters; prices are per square meter.
/// Areas divide by this (division keeps exact results for whole-meter
/// dimensions, a reciprocal multiply would not).
pub const MM2_PER_SQM: f64 = 1_000_000.0;

/// Fraction of the grand total collected by the half-deposit payment plan.
pub const HALF_DEPOSIT_RATE: f64 = 0.5;

/// Zero-pad width of the numeric suffix in document numbers (QT-001).
pub const NUMBER_PAD_WIDTH: usize = 3;

/// Tax rate bounds (percent).
pub const MIN_TAX_RATE_PCT: f64 = 0.0;
pub const MAX_TAX_RATE_PCT: f64 = 100.0;
