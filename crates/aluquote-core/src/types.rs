//! # Domain Types
//!
//! Core domain types used throughout AluQuote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Document     │   │    LineItem     │   │  PaymentEvent   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Fitting        │   │  method         │       │
//! │  │  document_number│   │  Accessory      │   │  reference      │       │
//! │  │  line_items     │   │                 │   │  amount         │       │
//! │  │  payment_history│   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Catalog: Product, Glass, Style, Colour, Accessory, Customer            │
//! │  Enums:   DocumentType, FittingKind, PaymentStatus, PaymentMethod       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Documents carry two identifiers:
//! - `id`: UUID v4 - immutable surrogate key
//! - `document_number`: human-readable business number (QT-001) used as the
//!   display identifier and the persistence key today
//!
//! ## Snapshot Pattern
//! Line items and the embedded customer are value copies taken at
//! composition time. Editing a catalog record later never changes a
//! document that was already written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Document Type
// =============================================================================

/// The kind of commercial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// A priced offer; the starting state of every document chain.
    Quotation,
    /// A demand for payment, forked from a quotation.
    Invoice,
    /// Proof of payment, forked from a quotation.
    Receipt,
}

impl DocumentType {
    /// Returns the number prefix for this document kind.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        match self {
            DocumentType::Quotation => "QT",
            DocumentType::Invoice => "INV",
            DocumentType::Receipt => "REC",
        }
    }
}

// =============================================================================
// Fitting Kind
// =============================================================================

/// What kind of aluminum fitting a line item describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FittingKind {
    Window,
    Door,
    Balcony,
}

// =============================================================================
// Payment Enums
// =============================================================================

/// Settlement state of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    /// Paid in full.
    Completed,
    /// A deposit was taken; a balance remains outstanding.
    #[serde(rename = "Deposit Made")]
    DepositMade,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Completed => write!(f, "Completed"),
            PaymentStatus::DepositMade => write!(f, "Deposit Made"),
        }
    }
}

/// How a payment was tendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Visa,
    Cheque,
}

impl PaymentMethod {
    /// Label for the optional payment reference, when the method takes one.
    ///
    /// Cash payments carry no reference.
    pub const fn reference_label(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Cash => None,
            PaymentMethod::Visa => Some("Card No."),
            PaymentMethod::Cheque => Some("Cheque No."),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "CASH"),
            PaymentMethod::Visa => write!(f, "VISA"),
            PaymentMethod::Cheque => write!(f, "CHEQUE"),
        }
    }
}

/// How much of the total is collected when a quotation becomes a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "plan", content = "amount", rename_all = "camelCase")]
pub enum PaymentPlan {
    /// The full grand total; the receipt starts out Completed.
    Full,
    /// Exactly half the grand total as a deposit.
    HalfDeposit,
    /// A caller-chosen deposit amount (must be positive).
    Custom(f64),
}

/// One recorded payment on a document.
///
/// This is the structured audit trail; a human-readable copy of the same
/// information is also appended to the document notes so printed documents
/// keep their familiar text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    pub method: PaymentMethod,
    /// Card or cheque number, when the method takes one.
    pub reference: Option<String>,
    pub amount: f64,
    #[ts(as = "String")]
    pub recorded_on: NaiveDate,
}

// =============================================================================
// Catalog Types
// =============================================================================

/// An aluminum fitting product (window, door or balcony system).
///
/// `price_per_sqm` is the base rate; glass and style surcharges are added
/// on top at line composition time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub kind: FittingKind,
    /// Base price per square meter.
    pub price_per_sqm: f64,
    pub description: String,
    pub material: String,
    pub color: String,
}

/// A glass option with a per-square-meter surcharge.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Glass {
    pub id: String,
    pub name: String,
    pub glass_type: String,
    /// Pane thickness in millimeters.
    pub thickness: f64,
    /// Surcharge per square meter, added to the product base rate.
    pub price_per_sqm: f64,
    pub description: String,
    pub specifications: String,
}

/// A frame style option with a per-square-meter surcharge.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Surcharge per square meter, added to the product base rate.
    pub price_per_sqm: f64,
}

/// A colour/finish option.
///
/// Colours carry a nominal rate for catalog display but do NOT change the
/// composed line rate; a selected colour only contributes its name to the
/// line description.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Colour {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hex_code: String,
    pub price_per_sqm: f64,
}

/// Which fittings an accessory may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AccessoryCategory {
    Window,
    Door,
    Balcony,
    #[serde(rename = "Window & Door")]
    WindowAndDoor,
}

impl AccessoryCategory {
    /// Whether an accessory of this category can attach to the given
    /// fitting kind.
    pub fn matches_fitting(&self, kind: FittingKind) -> bool {
        match self {
            AccessoryCategory::Window => kind == FittingKind::Window,
            AccessoryCategory::Door => kind == FittingKind::Door,
            AccessoryCategory::Balcony => kind == FittingKind::Balcony,
            AccessoryCategory::WindowAndDoor => {
                kind == FittingKind::Window || kind == FittingKind::Door
            }
        }
    }
}

/// A per-unit priced accessory (handle, lock, hinge set, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price per unit (NOT per square meter).
    pub price: f64,
    pub accessory_type: String,
    pub specifications: String,
    pub category: AccessoryCategory,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record.
///
/// `total_orders` and `total_spent` are informational display fields;
/// nothing in this workspace recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_orders: u32,
    pub total_spent: f64,
}

// =============================================================================
// Line Items
// =============================================================================

/// A window, door or balcony position on a document.
///
/// All fields are frozen snapshots from composition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FittingLine {
    pub id: String,
    pub kind: FittingKind,
    /// Width in millimeters.
    pub width_mm: u32,
    /// Height in millimeters.
    pub height_mm: u32,
    pub quantity: u32,
    /// Combined rate: product base + glass surcharge + style surcharge.
    pub price_per_sqm: f64,
    /// Comma-joined names of the selected product, colour, glass, style
    /// and accessory.
    pub description: String,
    pub colour: Option<String>,
    pub glass: Option<String>,
    pub style: Option<String>,
    /// Name of the attached accessory, if any.
    pub accessory: Option<String>,
    /// Attached accessory unit price × line quantity.
    pub accessory_total: f64,
}

/// A standalone accessory sold on its own line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryLine {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    /// Unit price frozen from the accessory record.
    pub unit_price: f64,
}

/// One priced position on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "lineType", rename_all = "camelCase")]
pub enum LineItem {
    Fitting(FittingLine),
    Accessory(AccessoryLine),
}

impl LineItem {
    pub fn id(&self) -> &str {
        match self {
            LineItem::Fitting(line) => &line.id,
            LineItem::Accessory(line) => &line.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            LineItem::Fitting(line) => &line.description,
            LineItem::Accessory(line) => &line.description,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            LineItem::Fitting(line) => line.quantity,
            LineItem::Accessory(line) => line.quantity,
        }
    }
}

// =============================================================================
// Document
// =============================================================================

/// A quotation, invoice or receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Surrogate key (UUID v4). Stable across number reuse.
    pub id: String,

    pub document_type: DocumentType,

    /// Business number (e.g. "QT-001"). Display identifier and current
    /// persistence key.
    pub document_number: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Embedded snapshot of the customer at save time.
    pub customer: Customer,

    pub line_items: Vec<LineItem>,

    /// Percentage, e.g. 15.0 for 15%. The grand total is tax-inclusive.
    pub tax_rate: f64,

    /// Absolute discount off the items total.
    pub discount: f64,

    /// Free-form notes; conversion and payment blocks are appended here.
    pub notes: String,

    /// Running paid total; receipts only.
    pub payment_amount: Option<f64>,

    /// Settlement state; receipts only.
    pub payment_status: Option<PaymentStatus>,

    /// Number of the quotation this document was forked from.
    pub converted_from: Option<String>,

    /// Structured audit trail of every payment taken.
    pub payment_history: Vec<PaymentEvent>,
}

impl Document {
    /// Creates an empty document of the given kind.
    pub fn new(
        document_type: DocumentType,
        document_number: String,
        date: NaiveDate,
        customer: Customer,
        tax_rate: f64,
    ) -> Self {
        Document {
            id: Uuid::new_v4().to_string(),
            document_type,
            document_number,
            date,
            customer,
            line_items: Vec::new(),
            tax_rate,
            discount: 0.0,
            notes: String::new(),
            payment_amount: None,
            payment_status: None,
            converted_from: None,
            payment_history: Vec::new(),
        }
    }

    /// Whether this receipt still has an outstanding balance.
    pub fn has_outstanding_balance(&self) -> bool {
        self.document_type == DocumentType::Receipt
            && self.payment_status == Some(PaymentStatus::DepositMade)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
