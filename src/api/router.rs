use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    AppState, add_book, add_customer, add_loan, delete_book, delete_customer, get_book,
    get_customer, show_books, show_customers, show_loans, update_book, update_customer,
};

/// Creates the API router with all record endpoints
///
/// Books:
/// - GET /show-books, POST /add-book, DELETE /delete-book/:id,
///   GET /get-book/:id, PUT /update-book/:id
///
/// Customers:
/// - GET /show-customers, POST /add-customer, DELETE /delete-customer/:id,
///   GET /get-customer/:id, PUT /update-customer/:id
///
/// Loans (create-only):
/// - GET /show-loans, POST /add-loan
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Books
        .route("/show-books", get(show_books))
        .route("/add-book", post(add_book))
        .route("/delete-book/:id", delete(delete_book))
        .route("/get-book/:id", get(get_book))
        .route("/update-book/:id", put(update_book))
        // Customers
        .route("/show-customers", get(show_customers))
        .route("/add-customer", post(add_customer))
        .route("/delete-customer/:id", delete(delete_customer))
        .route("/get-customer/:id", get(get_customer))
        .route("/update-customer/:id", put(update_customer))
        // Loans
        .route("/show-loans", get(show_loans))
        .route("/add-loan", post(add_loan))
        // Cross-origin requests are accepted from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
