//! Borrowed-book endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        loan::{BorrowRequest, Loan, LoanView},
        DeleteResult, InsertResult,
    },
    AppState,
};

/// List every active loan
#[utoipa::path(
    get,
    path = "/borrowed",
    tag = "borrowed",
    responses(
        (status = 200, description = "All active loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.borrowing.list_all().await?;
    Ok(Json(loans))
}

/// List a borrower's loans with catalog details of each book
#[utoipa::path(
    get,
    path = "/borrowed/{email}",
    tag = "borrowed",
    params(
        ("email" = String, Path, description = "Borrower email")
    ),
    responses(
        (status = 200, description = "Loans joined with their books; loans whose book cannot be fetched are omitted", body = Vec<LoanView>),
        (status = 500, description = "Ledger read failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrower_loans(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<LoanView>>> {
    let loans = state.services.borrowing.list_by_borrower(&email).await?;
    Ok(Json(loans))
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrowed",
    tag = "borrowed",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Loan recorded", body = InsertResult),
        (status = 400, description = "Book already borrowed, invalid id or invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<BorrowRequest>,
) -> AppResult<Json<InsertResult>> {
    let result = state.services.borrowing.borrow(request).await?;
    Ok(Json(result))
}

/// Return a book (delete its loan)
#[utoipa::path(
    delete,
    path = "/borrowed/{id}",
    tag = "borrowed",
    params(
        ("id" = String, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan removed, deleted_count is 0 if it did not exist", body = DeleteResult),
        (status = 400, description = "Invalid loan id", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = state.services.borrowing.return_book(&loan_id).await?;
    Ok(Json(result))
}
