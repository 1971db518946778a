//! # Engine Error Types
//!
//! What callers of the services see. Core and persistence errors pass
//! through transparently so their messages stay intact.

use thiserror::Error;

use aluquote_core::{CoreError, ValidationError};
use aluquote_db::DbError;

/// Service layer errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Business rule violation from aluquote-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence failure from aluquote-db.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================
