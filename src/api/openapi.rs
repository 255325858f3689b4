//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowed, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TopShelf API",
        version = "0.1.0",
        description = "Book lending REST API",
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::create_book,
        books::list_books_by_category,
        books::get_book,
        books::update_book_quantity,
        // Borrowed
        borrowed::list_loans,
        borrowed::list_borrower_loans,
        borrowed::borrow_book,
        borrowed::return_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::NewBook,
            crate::models::book::UpdateQuantity,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::LoanView,
            crate::models::loan::BorrowRequest,
            // Write acknowledgements
            crate::models::InsertResult,
            crate::models::UpdateResult,
            crate::models::DeleteResult,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog lookups and quantity updates"),
        (name = "borrowed", description = "Borrowing ledger")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
