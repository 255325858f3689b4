//! Data models for TopShelf

pub mod book;
pub mod loan;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use book::{Book, BookQuery, NewBook, UpdateQuantity};
pub use loan::{BorrowRequest, Loan, LoanView, NewLoan};

/// Parse an externally supplied store identifier.
///
/// Every id-keyed operation goes through this before touching a store.
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidIdentifier(format!("Invalid identifier: {}", raw)))
}

/// Drop payload keys that would shadow a typed field once the payload is flattened
pub(crate) fn strip_reserved(details: &mut Map<String, Value>, reserved: &[&str]) {
    for key in reserved {
        if details.remove(*key).is_some() {
            tracing::debug!("Dropping reserved key {:?} from payload", key);
        }
    }
}

/// Acknowledgement of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsertResult {
    pub inserted_id: Uuid,
}

/// Acknowledgement of an update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResult {
    /// Records matched by id
    pub matched_count: u64,
    /// Records whose quantity was written
    pub modified_count: u64,
    /// Set when the update created the record
    pub upserted_id: Option<Uuid>,
}

/// Acknowledgement of a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
