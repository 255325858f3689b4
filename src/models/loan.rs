//! Loan (borrow) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{book::Book, strip_reserved};

/// Wire names of the typed `Loan` fields; never allowed inside `details`
pub const LOAN_FIELDS: &[&str] = &["id", "user_email", "book_id", "borrowed_date", "return_date"];

/// Active loan as stored in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: Uuid,
    pub user_email: String,
    pub book_id: Uuid,
    pub borrowed_date: NaiveDate,
    /// Due date, not the actual return
    pub return_date: NaiveDate,
    /// Extra fields sent by the client with the borrow request
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

/// Borrow request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_loan_period"))]
pub struct BorrowRequest {
    #[serde(alias = "email")]
    #[validate(email(message = "Invalid email format"))]
    pub user_email: String,
    pub book_id: String,
    pub borrowed_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

fn validate_loan_period(request: &BorrowRequest) -> Result<(), ValidationError> {
    if request.return_date < request.borrowed_date {
        let mut error = ValidationError::new("loan_period");
        error.message = Some("Return date must not precede borrowed date".into());
        return Err(error);
    }
    Ok(())
}

/// Loan ready for insertion, with its book id already parsed
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoan {
    pub user_email: String,
    pub book_id: Uuid,
    pub borrowed_date: NaiveDate,
    pub return_date: NaiveDate,
    pub details: Map<String, Value>,
}

impl NewLoan {
    pub fn from_request(request: BorrowRequest, book_id: Uuid) -> Self {
        let mut details = request.details;
        strip_reserved(&mut details, LOAN_FIELDS);
        Self {
            user_email: request.user_email,
            book_id,
            borrowed_date: request.borrowed_date,
            return_date: request.return_date,
            details,
        }
    }
}

/// Loan merged with the current catalog record of its book.
///
/// Carries `return_date`, `borrowed_date` and `borrowed_id` (the loan id)
/// followed by every catalog field; a catalog field of the same name replaces
/// the loan value.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct LoanView(Map<String, Value>);

impl LoanView {
    pub fn new(loan: &Loan, book: Book) -> Self {
        let mut fields = Map::new();
        fields.insert("return_date".to_string(), Value::String(loan.return_date.to_string()));
        fields.insert("borrowed_date".to_string(), Value::String(loan.borrowed_date.to_string()));
        fields.insert("borrowed_id".to_string(), Value::String(loan.id.to_string()));

        fields.insert("id".to_string(), Value::String(book.id.to_string()));
        fields.insert("book_category".to_string(), Value::String(book.book_category));
        fields.insert("book_quantity".to_string(), Value::from(book.book_quantity));
        fields.extend(book.details);

        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}
