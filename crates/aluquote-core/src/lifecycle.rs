//! # Document Lifecycle
//!
//! Pure state transitions between quotations, invoices and receipts.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Document Lifecycle                                │
//! │                                                                         │
//! │                    ┌───────────────┐                                    │
//! │        ┌───────────│   Quotation   │───────────┐                        │
//! │        │  convert  └───────────────┘  convert  │                        │
//! │        ▼                                       ▼                        │
//! │  ┌───────────┐                     ┌──────────────────────┐             │
//! │  │  Invoice  │                     │       Receipt        │             │
//! │  └───────────┘                     │                      │             │
//! │                                    │  DepositMade         │             │
//! │                                    │      │ balance       │             │
//! │                                    │      ▼ payment(s)    │             │
//! │                                    │  Completed           │             │
//! │                                    └──────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Forking, Not Mutating
//! A conversion returns a brand-new document (fresh UUID, next number of
//! the target kind, today's date, provenance in `converted_from`). The
//! source quotation is never touched. The ONLY in-place mutation in the
//! whole system is the balance payment on a deposit receipt, and even
//! here these functions return an updated copy; writing it back under the
//! same number is the caller's job.
//!
//! Every payment lands twice: once as a structured [`PaymentEvent`] and
//! once as a human-readable block appended to the notes, so rendered
//! documents keep their audit text.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{cents, format_amount};
use crate::pricing::grand_total;
use crate::types::{
    Document, DocumentType, PaymentEvent, PaymentMethod, PaymentPlan, PaymentStatus,
};
use crate::HALF_DEPOSIT_RATE;
use uuid::Uuid;

// =============================================================================
// Conversions
// =============================================================================

/// Forks a quotation into an invoice.
///
/// The invoice copies the customer, line items, tax rate, discount and
/// notes; it gets a fresh id, the supplied invoice number, today's date
/// and a provenance note. No payment fields are set.
pub fn convert_to_invoice(
    source: &Document,
    invoice_number: String,
    today: NaiveDate,
) -> CoreResult<Document> {
    require_quotation(source)?;

    let mut invoice = fork(source, DocumentType::Invoice, invoice_number, today);
    invoice.notes.push_str(&conversion_note(source));
    Ok(invoice)
}

/// Forks a quotation into a receipt, collecting a payment.
///
/// The payment plan decides the collected amount and settlement state:
/// - `Full`       - the grand total; status Completed
/// - `HalfDeposit`- half the grand total; status DepositMade
/// - `Custom(x)`  - `x` (must be positive); status DepositMade even when
///   `x` equals the total, a later balance payment settles it
pub fn convert_to_receipt(
    source: &Document,
    plan: PaymentPlan,
    method: PaymentMethod,
    reference: Option<String>,
    receipt_number: String,
    today: NaiveDate,
) -> CoreResult<Document> {
    require_quotation(source)?;

    let total = grand_total(source);
    let (paid, status) = match plan {
        PaymentPlan::Full => (total, PaymentStatus::Completed),
        PaymentPlan::HalfDeposit => (total * HALF_DEPOSIT_RATE, PaymentStatus::DepositMade),
        PaymentPlan::Custom(amount) => {
            if amount <= 0.0 {
                return Err(ValidationError::MustBePositive {
                    field: "payment amount".to_string(),
                }
                .into());
            }
            (amount, PaymentStatus::DepositMade)
        }
    };

    let reference = normalize_reference(method, reference);

    let mut receipt = fork(source, DocumentType::Receipt, receipt_number, today);
    receipt.payment_amount = Some(paid);
    receipt.payment_status = Some(status);
    receipt.payment_history.push(PaymentEvent {
        method,
        reference: reference.clone(),
        amount: paid,
        recorded_on: today,
    });

    receipt.notes.push_str(&conversion_note(source));
    receipt
        .notes
        .push_str(&payment_note(method, reference.as_deref()));
    receipt.notes.push_str(&format!(
        "\nAmount Paid: ${}\nTotal: ${}",
        format_amount(paid),
        format_amount(total)
    ));
    Ok(receipt)
}

// =============================================================================
// Balance Payments
// =============================================================================

/// Records a balance payment against a deposit receipt.
///
/// Returns the updated receipt; the caller writes it back under the SAME
/// document number (this is the one in-place update in the system).
///
/// ## Rules
/// - the receipt must currently be DepositMade
/// - the amount must be positive
/// - the new paid total, compared at cent precision, must not exceed the
///   grand total; reaching it flips the status to Completed
pub fn record_balance_payment(
    receipt: &Document,
    amount: f64,
    method: PaymentMethod,
    reference: Option<String>,
    today: NaiveDate,
) -> CoreResult<Document> {
    if !receipt.has_outstanding_balance() {
        return Err(CoreError::NoOutstandingBalance {
            document_number: receipt.document_number.clone(),
        });
    }
    if amount <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        }
        .into());
    }

    let total = grand_total(receipt);
    let new_paid = receipt.payment_amount.unwrap_or(0.0) + amount;

    if cents(new_paid) > cents(total) {
        return Err(CoreError::Overpayment {
            attempted: new_paid,
            total,
        });
    }

    let reference = normalize_reference(method, reference);

    let mut updated = receipt.clone();
    updated.payment_amount = Some(new_paid);
    updated.payment_status = Some(if cents(new_paid) >= cents(total) {
        PaymentStatus::Completed
    } else {
        PaymentStatus::DepositMade
    });
    updated.payment_history.push(PaymentEvent {
        method,
        reference: reference.clone(),
        amount,
        recorded_on: today,
    });

    updated.notes.push_str(&format!(
        "\n\nBalance Payment ({})",
        today.format("%Y-%m-%d")
    ));
    updated
        .notes
        .push_str(&payment_note(method, reference.as_deref()));
    updated.notes.push_str(&format!(
        "\nAmount Paid: ${}\nTotal Paid: ${} / ${}",
        format_amount(amount),
        format_amount(new_paid),
        format_amount(total)
    ));
    Ok(updated)
}

// =============================================================================
// Internal Helpers
// =============================================================================

fn require_quotation(source: &Document) -> CoreResult<()> {
    if source.document_type != DocumentType::Quotation {
        return Err(CoreError::NotAQuotation {
            document_number: source.document_number.clone(),
            document_type: source.document_type,
        });
    }
    Ok(())
}

/// Copies the commercial content of the source into a new document of the
/// target kind. Payment fields start empty.
fn fork(
    source: &Document,
    document_type: DocumentType,
    document_number: String,
    today: NaiveDate,
) -> Document {
    Document {
        id: Uuid::new_v4().to_string(),
        document_type,
        document_number,
        date: today,
        customer: source.customer.clone(),
        line_items: source.line_items.clone(),
        tax_rate: source.tax_rate,
        discount: source.discount,
        notes: source.notes.clone(),
        payment_amount: None,
        payment_status: None,
        converted_from: Some(source.document_number.clone()),
        payment_history: Vec::new(),
    }
}

fn conversion_note(source: &Document) -> String {
    format!("\n\nConverted from {}", source.document_number)
}

/// "Payment Method: ..." block, with the card/cheque reference line when
/// the method takes one and a reference was given.
fn payment_note(method: PaymentMethod, reference: Option<&str>) -> String {
    let mut note = format!("\nPayment Method: {}", method);
    if let (Some(label), Some(reference)) = (method.reference_label(), reference) {
        note.push_str(&format!("\n{}: {}", label, reference));
    }
    note
}

/// Drops references that carry no information: empty strings, or any
/// reference on a cash payment.
fn normalize_reference(method: PaymentMethod, reference: Option<String>) -> Option<String> {
    match method.reference_label() {
        None => None,
        Some(_) => reference.filter(|r| !r.trim().is_empty()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, FittingKind, FittingLine, LineItem};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    /// A quotation with one 2000×1500mm window at 100/m², qty 2:
    /// grand total 600.00.
    fn quotation() -> Document {
        let customer = Customer {
            id: "c1".to_string(),
            name: "Paul Labiche".to_string(),
            email: "paul@example.sc".to_string(),
            phone: "+248 2 555 987".to_string(),
            address: "Anse Royale, Mahé".to_string(),
            total_orders: 2,
            total_spent: 4300.0,
        };
        let mut doc = Document::new(
            DocumentType::Quotation,
            "QT-001".to_string(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            customer,
            15.0,
        );
        doc.notes = "Site measurements confirmed.".to_string();
        doc.line_items = vec![LineItem::Fitting(FittingLine {
            id: "l1".to_string(),
            kind: FittingKind::Window,
            width_mm: 2000,
            height_mm: 1500,
            quantity: 2,
            price_per_sqm: 100.0,
            description: "Sliding Window".to_string(),
            colour: None,
            glass: None,
            style: None,
            accessory: None,
            accessory_total: 0.0,
        })];
        doc
    }

    #[test]
    fn test_convert_to_invoice_forks_a_new_document() {
        let source = quotation();
        let invoice = convert_to_invoice(&source, "INV-001".to_string(), today()).unwrap();

        assert_eq!(invoice.document_type, DocumentType::Invoice);
        assert_eq!(invoice.document_number, "INV-001");
        assert_eq!(invoice.date, today());
        assert_ne!(invoice.id, source.id);
        assert_eq!(invoice.converted_from.as_deref(), Some("QT-001"));
        assert_eq!(invoice.line_items, source.line_items);
        assert!(invoice.notes.ends_with("\n\nConverted from QT-001"));
        assert!(invoice.payment_amount.is_none());
        assert!(invoice.payment_status.is_none());

        // The source quotation is untouched
        assert_eq!(source.document_type, DocumentType::Quotation);
        assert_eq!(source.notes, "Site measurements confirmed.");
    }

    #[test]
    fn test_convert_rejects_non_quotations() {
        let source = quotation();
        let invoice = convert_to_invoice(&source, "INV-001".to_string(), today()).unwrap();
        let err = convert_to_invoice(&invoice, "INV-002".to_string(), today()).unwrap_err();
        assert!(matches!(err, CoreError::NotAQuotation { .. }));
    }

    #[test]
    fn test_full_payment_receipt_is_completed() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::Full,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        assert_eq!(receipt.payment_amount, Some(600.0));
        assert_eq!(receipt.payment_status, Some(PaymentStatus::Completed));
        assert_eq!(receipt.payment_history.len(), 1);
        assert_eq!(receipt.payment_history[0].amount, 600.0);
        assert!(receipt.notes.contains("Converted from QT-001"));
        assert!(receipt.notes.contains("Payment Method: CASH"));
        assert!(receipt.notes.contains("Amount Paid: $600.00\nTotal: $600.00"));
    }

    #[test]
    fn test_half_deposit_receipt() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::HalfDeposit,
            PaymentMethod::Visa,
            Some("4421".to_string()),
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        assert_eq!(receipt.payment_amount, Some(300.0));
        assert_eq!(receipt.payment_status, Some(PaymentStatus::DepositMade));
        assert!(receipt.notes.contains("Payment Method: VISA\nCard No.: 4421"));
    }

    #[test]
    fn test_custom_deposit_stays_deposit_made_even_at_full_amount() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::Custom(600.0),
            PaymentMethod::Cheque,
            Some("000451".to_string()),
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        // Plan decides the status, not the amount
        assert_eq!(receipt.payment_status, Some(PaymentStatus::DepositMade));
        assert!(receipt.notes.contains("Cheque No.: 000451"));
    }

    #[test]
    fn test_custom_deposit_must_be_positive() {
        let source = quotation();
        let err = convert_to_receipt(
            &source,
            PaymentPlan::Custom(0.0),
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_balance_payment_completes_the_receipt() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::HalfDeposit,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        let paid_off =
            record_balance_payment(&receipt, 300.0, PaymentMethod::Cash, None, today()).unwrap();

        assert_eq!(paid_off.payment_amount, Some(600.0));
        assert_eq!(paid_off.payment_status, Some(PaymentStatus::Completed));
        assert_eq!(paid_off.payment_history.len(), 2);
        assert_eq!(paid_off.document_number, "REC-001");
        assert!(paid_off
            .notes
            .contains("\n\nBalance Payment (2026-03-14)\nPayment Method: CASH"));
        assert!(paid_off
            .notes
            .contains("Amount Paid: $300.00\nTotal Paid: $600.00 / $600.00"));
    }

    #[test]
    fn test_partial_balance_payment_stays_deposit_made() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::HalfDeposit,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        let updated =
            record_balance_payment(&receipt, 100.0, PaymentMethod::Cash, None, today()).unwrap();
        assert_eq!(updated.payment_amount, Some(400.0));
        assert_eq!(updated.payment_status, Some(PaymentStatus::DepositMade));
    }

    #[test]
    fn test_overpayment_is_rejected() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::HalfDeposit,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        // 300 paid + 600 attempted > 600 total
        let err = record_balance_payment(&receipt, 600.0, PaymentMethod::Cash, None, today())
            .unwrap_err();
        assert!(matches!(err, CoreError::Overpayment { .. }));
    }

    #[test]
    fn test_balance_payment_requires_deposit_state() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::Full,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        let err = record_balance_payment(&receipt, 10.0, PaymentMethod::Cash, None, today())
            .unwrap_err();
        assert!(matches!(err, CoreError::NoOutstandingBalance { .. }));
    }

    #[test]
    fn test_balance_payment_amount_must_be_positive() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::HalfDeposit,
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        let err = record_balance_payment(&receipt, -5.0, PaymentMethod::Cash, None, today())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_cent_precision_settles_float_drift() {
        // 200 + 399.999999 lands a hair under 600.0 in raw f64 but
        // settles at cent precision
        let source = quotation();
        let mut receipt = convert_to_receipt(
            &source,
            PaymentPlan::Custom(200.0),
            PaymentMethod::Cash,
            None,
            "REC-001".to_string(),
            today(),
        )
        .unwrap();

        receipt =
            record_balance_payment(&receipt, 399.999999, PaymentMethod::Cash, None, today())
                .unwrap();
        assert_eq!(receipt.payment_status, Some(PaymentStatus::Completed));
    }

    #[test]
    fn test_blank_references_are_dropped() {
        let source = quotation();
        let receipt = convert_to_receipt(
            &source,
            PaymentPlan::Full,
            PaymentMethod::Visa,
            Some("   ".to_string()),
            "REC-001".to_string(),
            today(),
        )
        .unwrap();
        assert_eq!(receipt.payment_history[0].reference, None);
        assert!(!receipt.notes.contains("Card No."));
    }
}
