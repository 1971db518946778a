//! # Document Numbering
//!
//! Scan-based generation of human-readable document numbers.
//!
//! ## Format
//! `{PREFIX}-{NNN}` where the prefix depends on the document kind
//! (QT / INV / REC) and the suffix is zero-padded to three digits:
//! `QT-001`, `INV-042`, `REC-117`.
//!
//! ## How the Next Number Is Found
//! ```text
//! existing documents ──► keep same kind ──► parse integer after first '-'
//!                                                │
//!                        unparsable suffixes ◄───┤ (skipped)
//!                                                ▼
//!                                       max + 1, or 1 when none
//! ```
//!
//! No counter is persisted anywhere. Two consequences, both accepted:
//! - deleting the highest-numbered document frees its number for reuse
//! - two writers generating at the same instant can produce the same
//!   number (documents carry a surrogate UUID so this stays fixable
//!   without a data-model change)

use crate::types::{Document, DocumentType};
use crate::NUMBER_PAD_WIDTH;

/// Returns the next document number for the given kind.
///
/// ## Example
/// ```rust
/// use aluquote_core::numbering::format_number;
/// use aluquote_core::types::DocumentType;
///
/// assert_eq!(format_number(DocumentType::Quotation, 4), "QT-004");
/// assert_eq!(format_number(DocumentType::Invoice, 1), "INV-001");
/// ```
pub fn next_number(existing: &[Document], document_type: DocumentType) -> String {
    let highest = existing
        .iter()
        .filter(|doc| doc.document_type == document_type)
        .filter_map(|doc| parse_suffix(&doc.document_number))
        .max()
        .unwrap_or(0);

    format_number(document_type, highest + 1)
}

/// Formats a document number from its kind and numeric suffix.
pub fn format_number(document_type: DocumentType, suffix: u32) -> String {
    format!(
        "{}-{:0width$}",
        document_type.prefix(),
        suffix,
        width = NUMBER_PAD_WIDTH
    )
}

/// Parses the numeric suffix out of a document number.
///
/// Returns `None` for numbers without a dash or with a non-numeric
/// suffix; those are simply skipped during scanning.
pub fn parse_suffix(document_number: &str) -> Option<u32> {
    let (_, suffix) = document_number.split_once('-')?;
    suffix.parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
