//! Catalog store: store trait and its Postgres implementation

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{types::Json, FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, NewBook, BOOK_FIELDS},
        strip_reserved, UpdateResult,
    },
};

/// Persistent catalog of books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(&self, book: &NewBook) -> AppResult<Uuid>;

    async fn find(&self, query: &BookQuery) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// Set the quantity of a book. With `upsert`, an unknown id gets a new
    /// record with an empty category and no descriptive fields.
    async fn update_quantity(&self, id: Uuid, quantity: i32, upsert: bool) -> AppResult<UpdateResult>;
}

#[derive(FromRow)]
struct BookRow {
    id: Uuid,
    category: String,
    quantity: i32,
    details: Json<Map<String, Value>>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        let mut details = row.details.0;
        strip_reserved(&mut details, BOOK_FIELDS);
        Book {
            id: row.id,
            book_category: row.category,
            book_quantity: row.quantity,
            details,
        }
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn insert(&self, book: &NewBook) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO books (id, category, quantity, details) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(&book.book_category)
        .bind(book.book_quantity)
        .bind(Json(&book.details))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, category, quantity, details
            FROM books
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY created_at, id
            "#,
        )
        .bind(&query.category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, category, quantity, details FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Book::from))
    }

    async fn update_quantity(&self, id: Uuid, quantity: i32, upsert: bool) -> AppResult<UpdateResult> {
        let updated = sqlx::query("UPDATE books SET quantity = $1 WHERE id = $2")
            .bind(quantity)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated > 0 || !upsert {
            return Ok(UpdateResult {
                matched_count: updated,
                modified_count: updated,
                upserted_id: None,
            });
        }

        // xmax is zero only for a freshly inserted tuple
        let inserted = sqlx::query_scalar::<_, bool>(
            r#"
            INSERT INTO books (id, category, quantity, details)
            VALUES ($1, '', $2, '{}'::jsonb)
            ON CONFLICT (id) DO UPDATE SET quantity = EXCLUDED.quantity
            RETURNING (xmax = 0)
            "#,
        )
        .bind(id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(if inserted {
            UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id),
            }
        } else {
            UpdateResult {
                matched_count: 1,
                modified_count: 1,
                upserted_id: None,
            }
        })
    }
}
