//! # Error Types
//!
//! Domain-specific error types for aluquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aluquote-core errors (this file)                                      │
//! │  ├── CoreError        - Lifecycle and domain errors                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  aluquote-db errors (separate crate)                                   │
//! │  └── DbError          - Persistence operation failures                 │
//! │                                                                         │
//! │  aluquote-engine errors (separate crate)                               │
//! │  └── EngineError      - What callers of the services see               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → EngineError → Caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (document number, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::DocumentType;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Document cannot be found by its number.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Conversion was requested on a document that is not a quotation.
    ///
    /// ## When This Occurs
    /// - Converting an invoice to an invoice
    /// - Converting a receipt to anything
    #[error("Document {document_number} is a {document_type:?}, only quotations can be converted")]
    NotAQuotation {
        document_number: String,
        document_type: DocumentType,
    },

    /// A balance payment was requested on a document that is not a
    /// deposit receipt.
    ///
    /// ## When This Occurs
    /// - Paying down a quotation or invoice
    /// - Paying down a receipt that is already Completed
    #[error("Document {document_number} has no outstanding deposit balance")]
    NoOutstandingBalance { document_number: String },

    /// A balance payment would push the paid total past the grand total.
    ///
    /// ## User Workflow
    /// ```text
    /// Receipt total 1000.00, paid 500.00
    ///      │
    ///      ▼
    /// Record balance payment 600.00
    ///      │
    ///      ▼
    /// Overpayment { attempted: 1100.00, total: 1000.00 }
    ///      │
    ///      ▼
    /// UI shows: "Payment exceeds remaining balance"
    /// ```
    #[error("Payment of {attempted:.2} exceeds document total {total:.2}")]
    Overpayment { attempted: f64, total: f64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., unparsable document number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate document number).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A collection that must not be empty is empty.
    #[error("{field} must contain at least one entry")]
    EmptyCollection { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
