//! # Validation Module
//!
//! Input validation utilities for AluQuote.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine services (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Persistence                                                  │
//! │  └── NOT NULL / PRIMARY KEY constraints                                │
//! │                                                                         │
//! │  A document that fails here is rejected BEFORE any persistence call.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use aluquote_core::validation::{validate_customer_name, validate_tax_rate};
//!
//! validate_customer_name("Marie Payet").unwrap();
//! validate_tax_rate(15.0).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Document;
use crate::{MAX_TAX_RATE_PCT, MIN_TAX_RATE_PCT};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate percentage.
///
/// ## Rules
/// - Must be between 0 and 100 (inclusive)
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !(MIN_TAX_RATE_PCT..=MAX_TAX_RATE_PCT).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: MIN_TAX_RATE_PCT,
            max: MAX_TAX_RATE_PCT,
        });
    }

    Ok(())
}

/// Validates a discount amount.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (no discount)
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if discount < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a payment amount.
///
/// ## Rules
/// - Must be positive (> 0); zero and negative payments are meaningless
pub fn validate_payment_amount(amount: f64) -> ValidationResult<()> {
    if amount <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Document Validation
// =============================================================================

/// Validates a document before it is saved.
///
/// ## Rules
/// - customer name must be present
/// - at least one line item
/// - tax rate within 0..=100
/// - discount non-negative
///
/// Duplicate-number checking needs the set of existing documents and
/// lives in the engine layer.
pub fn validate_document(document: &Document) -> ValidationResult<()> {
    validate_customer_name(&document.customer.name)?;

    if document.line_items.is_empty() {
        return Err(ValidationError::EmptyCollection {
            field: "line items".to_string(),
        });
    }

    validate_tax_rate(document.tax_rate)?;
    validate_discount(document.discount)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
