//! # Pricing Calculator
//!
//! Pure pricing math for documents and line items.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Pipeline                                │
//! │                                                                         │
//! │  per line:   area = (width_mm × height_mm) / 1_000_000       [m²]      │
//! │              total = area × rate × qty + accessory_total               │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  document:   items_total = Σ line totals                               │
//! │              total_with_tax = items_total − discount                   │
//! │                       │                                                 │
//! │                       ▼   (grand total is TAX-INCLUSIVE)               │
//! │              subtotal   = total_with_tax / (1 + rate/100)              │
//! │              tax_amount = total_with_tax − subtotal                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tax Is Back-Calculated
//! The discounted items total IS the grand total. Tax is carved out of it
//! for display, never added on top. At 15%: a 1150.00 grand total shows a
//! 1000.00 subtotal and 150.00 tax.
//!
//! All functions are deterministic and carry full `f64` precision;
//! rounding belongs to the display/comparison boundary (see
//! [`crate::money`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Document, LineItem};
use crate::MM2_PER_SQM;

// =============================================================================
// Line-Level Calculations
// =============================================================================

/// Area of a line in square meters. Accessory lines have no area.
///
/// ## Example
/// ```rust
/// use aluquote_core::pricing::line_area;
/// use aluquote_core::types::{FittingKind, FittingLine, LineItem};
///
/// let line = LineItem::Fitting(FittingLine {
///     id: "l1".into(),
///     kind: FittingKind::Window,
///     width_mm: 2000,
///     height_mm: 1500,
///     quantity: 2,
///     price_per_sqm: 100.0,
///     description: "Sliding Window".into(),
///     colour: None,
///     glass: None,
///     style: None,
///     accessory: None,
///     accessory_total: 0.0,
/// });
/// assert_eq!(line_area(&line), 3.0);
/// ```
pub fn line_area(line: &LineItem) -> f64 {
    match line {
        LineItem::Fitting(fitting) => {
            fitting.width_mm as f64 * fitting.height_mm as f64 / MM2_PER_SQM
        }
        LineItem::Accessory(_) => 0.0,
    }
}

/// Total for one line.
///
/// Fittings: `area × rate × quantity + accessory_total`.
/// Standalone accessories: `unit_price × quantity`.
pub fn line_total(line: &LineItem) -> f64 {
    match line {
        LineItem::Fitting(fitting) => {
            let unit_area = fitting.width_mm as f64 * fitting.height_mm as f64 / MM2_PER_SQM;
            unit_area * fitting.price_per_sqm * fitting.quantity as f64 + fitting.accessory_total
        }
        LineItem::Accessory(accessory) => accessory.unit_price * accessory.quantity as f64,
    }
}

/// Sum of all line totals, before discount.
pub fn items_total(line_items: &[LineItem]) -> f64 {
    line_items.iter().map(line_total).sum()
}

// =============================================================================
// Document-Level Calculations
// =============================================================================

/// The computed totals of a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Sum of line totals before discount.
    pub items_total: f64,
    pub discount: f64,
    /// Grand total (tax-inclusive): items_total − discount.
    pub total_with_tax: f64,
    /// Tax-exclusive portion, back-calculated from the grand total.
    pub subtotal: f64,
    /// total_with_tax − subtotal.
    pub tax_amount: f64,
}

/// Computes the full totals breakdown for a document.
pub fn totals(document: &Document) -> DocumentTotals {
    let items = items_total(&document.line_items);
    let total_with_tax = items - document.discount;
    let subtotal = total_with_tax / (1.0 + document.tax_rate / 100.0);

    DocumentTotals {
        items_total: items,
        discount: document.discount,
        total_with_tax,
        subtotal,
        tax_amount: total_with_tax - subtotal,
    }
}

/// The grand total a customer owes for a document.
pub fn grand_total(document: &Document) -> f64 {
    items_total(&document.line_items) - document.discount
}

/// Remaining balance on a document, given its running paid amount.
/// Zero when nothing has been paid against a quotation/invoice.
pub fn balance_due(document: &Document) -> f64 {
    grand_total(document) - document.payment_amount.unwrap_or(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
