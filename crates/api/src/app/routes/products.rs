use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::dto;
use crate::app::services::AppServices;

/// `GET /api/products?category=&q=`
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ProductsQuery>,
) -> axum::response::Response {
    let filter = params.into_filter();
    let products = services.catalog().query(&filter);
    tracing::debug!(
        category = ?filter.category(),
        keyword = ?filter.keyword(),
        matched = products.len(),
        "product query"
    );
    (StatusCode::OK, Json(dto::ProductsResponse::new(products))).into_response()
}

/// `GET /api/categories`
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let categories = services.catalog().categories();
    (StatusCode::OK, Json(dto::CategoriesResponse { categories })).into_response()
}
