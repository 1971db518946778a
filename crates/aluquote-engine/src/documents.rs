//! # Document Service
//!
//! Orchestrates document CRUD, numbering and the quotation lifecycle over
//! a key-value store.
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     DocumentService                                     │
//! │                                                                         │
//! │  caller ──► DocumentService ──► aluquote-core (pure decisions)         │
//! │                   │                  next_number, convert_*,            │
//! │                   │                  record_balance_payment,            │
//! │                   │                  validate_document, totals          │
//! │                   │                                                     │
//! │                   └────────────► KvStore (dumb persistence)            │
//! │                                      documents keyed by number          │
//! │                                                                         │
//! │  The service owns the two things core must not touch:                  │
//! │    - the clock (conversion/payment dates)                              │
//! │    - the store (reads before, writes after each pure decision)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use aluquote_core::lifecycle;
use aluquote_core::numbering;
use aluquote_core::pricing::{self, DocumentTotals};
use aluquote_core::validation::validate_document;
use aluquote_core::{
    CoreError, Document, DocumentType, PaymentMethod, PaymentPlan, ValidationError,
};
use aluquote_db::{EntityKind, KvStore};

use crate::error::EngineResult;

/// Service for quotations, invoices and receipts.
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn KvStore>,
}

impl DocumentService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        DocumentService { store }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Lists every document, ordered by document number.
    pub async fn list(&self) -> EngineResult<Vec<Document>> {
        let records = self.store.list(EntityKind::Document).await?;
        let documents = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Document>, _>>()
            .map_err(aluquote_db::DbError::from)?;

        debug!(count = documents.len(), "Listed documents");
        Ok(documents)
    }

    /// Fetches one document by its number.
    pub async fn get(&self, document_number: &str) -> EngineResult<Document> {
        let record = self
            .store
            .get(EntityKind::Document, document_number)
            .await?
            .ok_or_else(|| CoreError::DocumentNotFound(document_number.to_string()))?;

        let document = serde_json::from_value(record).map_err(aluquote_db::DbError::from)?;
        Ok(document)
    }

    /// Validates and saves a document under its number.
    ///
    /// `editing` distinguishes an update from a create: creating a
    /// document whose number is already taken is a duplicate error, while
    /// an edit writes back under the existing number.
    pub async fn save(&self, document: &Document, editing: bool) -> EngineResult<()> {
        validate_document(document)?;

        if !editing {
            let taken = self
                .store
                .get(EntityKind::Document, &document.document_number)
                .await?
                .is_some();
            if taken {
                return Err(ValidationError::Duplicate {
                    field: "document number".to_string(),
                    value: document.document_number.clone(),
                }
                .into());
            }
        }

        let record = serde_json::to_value(document).map_err(aluquote_db::DbError::from)?;
        self.store
            .upsert(EntityKind::Document, &document.document_number, &record)
            .await?;

        info!(
            number = %document.document_number,
            kind = ?document.document_type,
            editing,
            "Saved document"
        );
        Ok(())
    }

    /// Deletes a document by its number. Returns false when absent.
    ///
    /// Deleting is unconditional: converted-from links in other documents
    /// are informational and are not checked.
    pub async fn delete(&self, document_number: &str) -> EngineResult<bool> {
        let removed = self
            .store
            .remove(EntityKind::Document, document_number)
            .await?;
        info!(number = %document_number, removed, "Deleted document");
        Ok(removed)
    }

    // =========================================================================
    // Numbering & Totals
    // =========================================================================

    /// The next free number for the given document kind.
    pub async fn next_number(&self, document_type: DocumentType) -> EngineResult<String> {
        let existing = self.list().await?;
        Ok(numbering::next_number(&existing, document_type))
    }

    /// Computed totals for a stored document.
    pub async fn totals(&self, document_number: &str) -> EngineResult<DocumentTotals> {
        let document = self.get(document_number).await?;
        Ok(pricing::totals(&document))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Converts a quotation into a new invoice and saves it.
    ///
    /// The source quotation is left untouched; the invoice gets the next
    /// free INV number and today's date.
    pub async fn convert_to_invoice(&self, quotation_number: &str) -> EngineResult<Document> {
        let source = self.get(quotation_number).await?;
        let invoice_number = self.next_number(DocumentType::Invoice).await?;

        let invoice =
            lifecycle::convert_to_invoice(&source, invoice_number, Utc::now().date_naive())?;
        self.save(&invoice, false).await?;

        info!(
            from = %quotation_number,
            to = %invoice.document_number,
            "Converted quotation to invoice"
        );
        Ok(invoice)
    }

    /// Converts a quotation into a new receipt, collecting a payment.
    pub async fn convert_to_receipt(
        &self,
        quotation_number: &str,
        plan: PaymentPlan,
        method: PaymentMethod,
        reference: Option<String>,
    ) -> EngineResult<Document> {
        let source = self.get(quotation_number).await?;
        let receipt_number = self.next_number(DocumentType::Receipt).await?;

        let receipt = lifecycle::convert_to_receipt(
            &source,
            plan,
            method,
            reference,
            receipt_number,
            Utc::now().date_naive(),
        )?;
        self.save(&receipt, false).await?;

        info!(
            from = %quotation_number,
            to = %receipt.document_number,
            status = ?receipt.payment_status,
            "Converted quotation to receipt"
        );
        Ok(receipt)
    }

    /// Records a balance payment on a deposit receipt and writes the
    /// updated receipt back under the same number.
    pub async fn record_balance_payment(
        &self,
        receipt_number: &str,
        amount: f64,
        method: PaymentMethod,
        reference: Option<String>,
    ) -> EngineResult<Document> {
        let receipt = self.get(receipt_number).await?;

        let updated = lifecycle::record_balance_payment(
            &receipt,
            amount,
            method,
            reference,
            Utc::now().date_naive(),
        )?;
        self.save(&updated, true).await?;

        info!(
            number = %receipt_number,
            amount,
            status = ?updated.payment_status,
            "Recorded balance payment"
        );
        Ok(updated)
    }
}
