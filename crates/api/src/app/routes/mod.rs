use axum::{
    Router,
    routing::{get, post},
};

pub mod ask;
pub mod products;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/categories", get(products::list_categories))
        .route("/products", get(products::list_products))
        .route("/products/", get(products::list_products))
        .route("/ask", post(ask::ask))
}
