//! Catalog service: id-validated access to the book store

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookQuery, NewBook, UpdateQuantity},
        parse_id, InsertResult, UpdateResult,
    },
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookStore>,
    upsert_on_quantity_update: bool,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookStore>, upsert_on_quantity_update: bool) -> Self {
        Self {
            books,
            upsert_on_quantity_update,
        }
    }

    /// Add a book to the catalog
    pub async fn create_book(&self, book: NewBook) -> AppResult<InsertResult> {
        book.validate()?;
        let book = book.without_reserved_keys();
        let inserted_id = self.books.insert(&book).await?;
        tracing::info!(book_id = %inserted_id, category = %book.book_category, "Book created");
        Ok(InsertResult { inserted_id })
    }

    /// Books listed under a category
    pub async fn books_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        self.books.find(&BookQuery::category(category)).await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let id = parse_id(id)?;
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Set the shelf quantity of a book.
    ///
    /// Unknown ids are a `NotFound` unless upserts were enabled in configuration.
    pub async fn update_quantity(&self, id: &str, update: UpdateQuantity) -> AppResult<UpdateResult> {
        let id = parse_id(id)?;
        update.validate()?;

        let result = self
            .books
            .update_quantity(id, update.book_quantity, self.upsert_on_quantity_update)
            .await?;

        if result.matched_count == 0 && result.upserted_id.is_none() {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        if let Some(created) = result.upserted_id {
            tracing::warn!(book_id = %created, "Quantity update created a new catalog record");
        }

        Ok(result)
    }
}
