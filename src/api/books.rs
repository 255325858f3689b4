//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        book::{Book, NewBook, UpdateQuantity},
        InsertResult, UpdateResult,
    },
    AppState,
};

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book created", body = InsertResult),
        (status = 400, description = "Invalid book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AppJson(book): AppJson<NewBook>,
) -> AppResult<Json<InsertResult>> {
    let result = state.services.catalog.create_book(book).await?;
    Ok(Json(result))
}

/// List books in a category
#[utoipa::path(
    get,
    path = "/books/{category}",
    tag = "books",
    params(
        ("category" = String, Path, description = "Category tag")
    ),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>)
    )
)]
pub async fn list_books_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_by_category(&category).await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 400, description = "Invalid book id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Update the shelf quantity of a book
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = UpdateQuantity,
    responses(
        (status = 200, description = "Quantity updated", body = UpdateResult),
        (status = 400, description = "Invalid id or negative quantity", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found and upserts disabled", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(update): AppJson<UpdateQuantity>,
) -> AppResult<Json<UpdateResult>> {
    let result = state.services.catalog.update_quantity(&id, update).await?;
    Ok(Json(result))
}
