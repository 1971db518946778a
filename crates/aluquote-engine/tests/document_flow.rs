//! End-to-end document flow tests over an in-memory database:
//! create → number → convert → pay down.

use std::sync::Arc;

use chrono::NaiveDate;

use aluquote_core::{
    CoreError, Customer, Document, DocumentType, FittingKind, FittingLine, LineItem,
    PaymentMethod, PaymentPlan, PaymentStatus, ValidationError,
};
use aluquote_db::{Database, DbConfig, KvStore};
use aluquote_engine::{DocumentService, EngineError};

async fn service() -> DocumentService {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let store: Arc<dyn KvStore> = Arc::new(db);
    DocumentService::new(store)
}

fn customer() -> Customer {
    Customer {
        id: "c1".to_string(),
        name: "Marie Payet".to_string(),
        email: "marie@example.sc".to_string(),
        phone: "+248 2 555 123".to_string(),
        address: "Beau Vallon, Mahé".to_string(),
        total_orders: 0,
        total_spent: 0.0,
    }
}

/// A quotation with one 2000×1500mm window at 100/m², qty 2:
/// grand total 600.00.
fn quotation(number: &str) -> Document {
    let mut doc = Document::new(
        DocumentType::Quotation,
        number.to_string(),
        NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        customer(),
        15.0,
    );
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

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn test_save_and_read_back() {
    let service = service().await;
    let doc = quotation("QT-001");

    service.save(&doc, false).await.unwrap();
    let loaded = service.get("QT-001").await.unwrap();

    // Field-for-field identical after the JSON roundtrip
    assert_eq!(loaded, doc);
}

#[tokio::test]
async fn test_get_missing_document() {
    let service = service().await;
    let err = service.get("QT-404").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::DocumentNotFound(_))
    ));
}

#[tokio::test]
async fn test_create_rejects_duplicate_number() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();

    let err = service.save(&quotation("QT-001"), false).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::Validation(ValidationError::Duplicate { .. }))
    ));
}

#[tokio::test]
async fn test_edit_writes_back_under_same_number() {
    let service = service().await;
    let mut doc = quotation("QT-001");
    service.save(&doc, false).await.unwrap();

    doc.discount = 50.0;
    service.save(&doc, true).await.unwrap();

    let loaded = service.get("QT-001").await.unwrap();
    assert_eq!(loaded.discount, 50.0);
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_rejects_empty_line_items() {
    let service = service().await;
    let mut doc = quotation("QT-001");
    doc.line_items.clear();

    let err = service.save(&doc, false).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::Validation(ValidationError::EmptyCollection { .. }))
    ));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();

    assert!(service.delete("QT-001").await.unwrap());
    assert!(!service.delete("QT-001").await.unwrap());
    assert!(service.list().await.unwrap().is_empty());
}

// =============================================================================
// Numbering & Totals
// =============================================================================

#[tokio::test]
async fn test_next_number_starts_at_one() {
    let service = service().await;
    assert_eq!(
        service.next_number(DocumentType::Invoice).await.unwrap(),
        "INV-001"
    );
}

#[tokio::test]
async fn test_next_number_skips_gaps() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();
    service.save(&quotation("QT-003"), false).await.unwrap();

    assert_eq!(
        service.next_number(DocumentType::Quotation).await.unwrap(),
        "QT-004"
    );
    // Other kinds are unaffected by quotation numbers
    assert_eq!(
        service.next_number(DocumentType::Receipt).await.unwrap(),
        "REC-001"
    );
}

#[tokio::test]
async fn test_totals_back_calculate_tax() {
    let service = service().await;
    let mut doc = quotation("QT-001");
    // One 2300×1000mm panel at 500/m²: grand total 1150.00
    doc.line_items = vec![LineItem::Fitting(FittingLine {
        id: "l1".to_string(),
        kind: FittingKind::Window,
        width_mm: 2300,
        height_mm: 1000,
        quantity: 1,
        price_per_sqm: 500.0,
        description: "Fixed Window".to_string(),
        colour: None,
        glass: None,
        style: None,
        accessory: None,
        accessory_total: 0.0,
    })];
    service.save(&doc, false).await.unwrap();

    let totals = service.totals("QT-001").await.unwrap();
    assert!((totals.total_with_tax - 1150.0).abs() < 1e-9);
    assert!((totals.subtotal - 1000.0).abs() < 1e-9);
    assert!((totals.tax_amount - 150.0).abs() < 1e-9);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_convert_to_invoice_leaves_source_untouched() {
    let service = service().await;
    let source = quotation("QT-001");
    service.save(&source, false).await.unwrap();

    let invoice = service.convert_to_invoice("QT-001").await.unwrap();

    assert_eq!(invoice.document_number, "INV-001");
    assert_eq!(invoice.document_type, DocumentType::Invoice);
    assert_eq!(invoice.converted_from.as_deref(), Some("QT-001"));

    // Both documents are stored; the quotation is unchanged in every field
    let stored_source = service.get("QT-001").await.unwrap();
    assert_eq!(stored_source, source);
    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_convert_rejects_non_quotations() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();
    service.convert_to_invoice("QT-001").await.unwrap();

    let err = service.convert_to_invoice("INV-001").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::NotAQuotation { .. })
    ));
}

#[tokio::test]
async fn test_half_deposit_receipt_then_balance_payment_completes() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();

    let receipt = service
        .convert_to_receipt(
            "QT-001",
            PaymentPlan::HalfDeposit,
            PaymentMethod::Visa,
            Some("4421".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(receipt.document_number, "REC-001");
    assert_eq!(receipt.payment_amount, Some(300.0));
    assert_eq!(receipt.payment_status, Some(PaymentStatus::DepositMade));

    let settled = service
        .record_balance_payment("REC-001", 300.0, PaymentMethod::Cash, None)
        .await
        .unwrap();

    assert_eq!(settled.payment_amount, Some(600.0));
    assert_eq!(settled.payment_status, Some(PaymentStatus::Completed));
    assert_eq!(settled.payment_history.len(), 2);

    // The update landed under the same number, no new document appeared
    let stored = service.get("REC-001").await.unwrap();
    assert_eq!(stored.payment_status, Some(PaymentStatus::Completed));
    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_full_payment_receipt_is_completed_immediately() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();

    let receipt = service
        .convert_to_receipt("QT-001", PaymentPlan::Full, PaymentMethod::Cash, None)
        .await
        .unwrap();

    assert_eq!(receipt.payment_amount, Some(600.0));
    assert_eq!(receipt.payment_status, Some(PaymentStatus::Completed));
    assert!(receipt.notes.contains("Converted from QT-001"));
    assert!(receipt.notes.contains("Payment Method: CASH"));
}

#[tokio::test]
async fn test_overpayment_is_rejected_and_not_persisted() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();
    service
        .convert_to_receipt("QT-001", PaymentPlan::HalfDeposit, PaymentMethod::Cash, None)
        .await
        .unwrap();

    // 300 paid + 600 attempted > 600 total
    let err = service
        .record_balance_payment("REC-001", 600.0, PaymentMethod::Cash, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::Overpayment { .. })
    ));

    let stored = service.get("REC-001").await.unwrap();
    assert_eq!(stored.payment_amount, Some(300.0));
    assert_eq!(stored.payment_status, Some(PaymentStatus::DepositMade));
}

#[tokio::test]
async fn test_balance_payment_requires_outstanding_balance() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();
    service
        .convert_to_receipt("QT-001", PaymentPlan::Full, PaymentMethod::Cash, None)
        .await
        .unwrap();

    let err = service
        .record_balance_payment("REC-001", 50.0, PaymentMethod::Cash, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::NoOutstandingBalance { .. })
    ));
}

#[tokio::test]
async fn test_receipt_numbers_advance_per_kind() {
    let service = service().await;
    service.save(&quotation("QT-001"), false).await.unwrap();
    service.save(&quotation("QT-002"), false).await.unwrap();

    let first = service
        .convert_to_receipt("QT-001", PaymentPlan::Full, PaymentMethod::Cash, None)
        .await
        .unwrap();
    let second = service
        .convert_to_receipt("QT-002", PaymentPlan::Full, PaymentMethod::Cash, None)
        .await
        .unwrap();

    assert_eq!(first.document_number, "REC-001");
    assert_eq!(second.document_number, "REC-002");
}
