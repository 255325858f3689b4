//! Borrowing workflow: list, borrow and return against the loan ledger

use std::sync::Arc;

use futures::future::join_all;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        loan::{BorrowRequest, Loan, LoanView, NewLoan},
        parse_id, DeleteResult, InsertResult,
    },
    repository::LoanStore,
    services::lookup::CatalogLookup,
};

#[derive(Clone)]
pub struct BorrowingService {
    loans: Arc<dyn LoanStore>,
    catalog: Arc<dyn CatalogLookup>,
}

impl BorrowingService {
    pub fn new(loans: Arc<dyn LoanStore>, catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { loans, catalog }
    }

    /// Every active loan, as stored
    pub async fn list_all(&self) -> AppResult<Vec<Loan>> {
        self.loans.list_all().await
    }

    /// Loans of one borrower, each merged with the current catalog record of its book.
    ///
    /// Lookups run concurrently and all of them are awaited. A loan whose book
    /// cannot be fetched is left out of the result.
    pub async fn list_by_borrower(&self, user_email: &str) -> AppResult<Vec<LoanView>> {
        let loans = self.loans.list_by_borrower(user_email).await?;

        let lookups = loans.iter().map(|loan| self.catalog.fetch_book(loan.book_id));
        let books = join_all(lookups).await;

        let views = loans
            .iter()
            .zip(books)
            .filter_map(|(loan, book)| match book {
                Ok(book) => Some(LoanView::new(loan, book)),
                Err(e) => {
                    tracing::warn!(
                        loan_id = %loan.id,
                        book_id = %loan.book_id,
                        "Dropping loan from borrower listing: {}",
                        e
                    );
                    None
                }
            })
            .collect();

        Ok(views)
    }

    /// Record a new loan, refusing a second active loan of the same book by the same borrower
    pub async fn borrow(&self, request: BorrowRequest) -> AppResult<InsertResult> {
        request.validate()?;
        let book_id = parse_id(&request.book_id)?;
        let loan = NewLoan::from_request(request, book_id);

        if self.loans.exists(&loan.user_email, loan.book_id).await? {
            return Err(AppError::AlreadyBorrowed);
        }

        // A concurrent borrow may have won between the check and the insert
        let inserted_id = self
            .loans
            .insert(&loan)
            .await?
            .ok_or(AppError::AlreadyBorrowed)?;

        tracing::info!(loan_id = %inserted_id, book_id = %loan.book_id, "Book borrowed");

        Ok(InsertResult { inserted_id })
    }

    /// Delete a loan. Returning an unknown loan is not an error.
    pub async fn return_book(&self, loan_id: &str) -> AppResult<DeleteResult> {
        let id = parse_id(loan_id)?;
        let deleted_count = self.loans.delete(id).await?;

        if deleted_count == 0 {
            tracing::debug!(loan_id = %id, "Return of unknown loan");
        }

        Ok(DeleteResult { deleted_count })
    }
}
