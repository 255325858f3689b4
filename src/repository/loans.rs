//! Loan ledger: store trait and its Postgres implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use sqlx::{types::Json, FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        loan::{Loan, NewLoan, LOAN_FIELDS},
        strip_reserved,
    },
};

/// Persistent set of active loans.
///
/// At most one loan exists per (`user_email`, `book_id`). `insert` reports a
/// violation of that rule as `Ok(None)` rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Every loan, in insertion order
    async fn list_all(&self) -> AppResult<Vec<Loan>>;

    /// Loans held by one borrower, in insertion order
    async fn list_by_borrower(&self, user_email: &str) -> AppResult<Vec<Loan>>;

    async fn exists(&self, user_email: &str, book_id: Uuid) -> AppResult<bool>;

    /// Insert a loan, returning its id, or `None` if the pair is already on loan
    async fn insert(&self, loan: &NewLoan) -> AppResult<Option<Uuid>>;

    /// Delete a loan, returning the number of rows removed
    async fn delete(&self, id: Uuid) -> AppResult<u64>;
}

#[derive(FromRow)]
struct LoanRow {
    id: Uuid,
    user_email: String,
    book_id: Uuid,
    borrowed_date: NaiveDate,
    return_date: NaiveDate,
    details: Json<Map<String, Value>>,
}

impl From<LoanRow> for Loan {
    fn from(row: LoanRow) -> Self {
        let mut details = row.details.0;
        strip_reserved(&mut details, LOAN_FIELDS);
        Loan {
            id: row.id,
            user_email: row.user_email,
            book_id: row.book_id,
            borrowed_date: row.borrowed_date,
            return_date: row.return_date,
            details,
        }
    }
}

const LOAN_COLUMNS: &str = "id, user_email, book_id, borrowed_date, return_date, details";

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStore for LoansRepository {
    async fn list_all(&self) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {} FROM loans ORDER BY created_at, id",
            LOAN_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Loan::from).collect())
    }

    async fn list_by_borrower(&self, user_email: &str) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {} FROM loans WHERE user_email = $1 ORDER BY created_at, id",
            LOAN_COLUMNS
        ))
        .bind(user_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Loan::from).collect())
    }

    async fn exists(&self, user_email: &str, book_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM loans WHERE user_email = $1 AND book_id = $2)",
        )
        .bind(user_email)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, loan: &NewLoan) -> AppResult<Option<Uuid>> {
        // The unique (user_email, book_id) index turns a concurrent duplicate into no row
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO loans (id, user_email, book_id, borrowed_date, return_date, details)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_email, book_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&loan.user_email)
        .bind(loan.book_id)
        .bind(loan.borrowed_date)
        .bind(loan.return_date)
        .bind(Json(&loan.details))
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
