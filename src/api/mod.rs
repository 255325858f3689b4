//! API handlers for TopShelf REST endpoints

pub mod books;
pub mod borrowed;
pub mod health;
pub mod openapi;

use axum::{
    extract::FromRequest,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Catalog
        .route("/books", post(books::create_book))
        .route("/books/:category", get(books::list_books_by_category))
        .route("/book/:id", get(books::get_book).put(books::update_book_quantity))
        // Borrowing ledger; the segment is a borrower email on GET and a loan id on DELETE
        .route("/borrowed", get(borrowed::list_loans).post(borrowed::borrow_book))
        .route(
            "/borrowed/:key",
            get(borrowed::list_borrower_loans).delete(borrowed::return_book),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
