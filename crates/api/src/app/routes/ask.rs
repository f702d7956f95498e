use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use crate::app::dto;
use crate::app::errors::AskFailure;
use crate::app::services::AppServices;

/// `POST /api/ask` with `{ "query": string }`.
///
/// Validation happens before the gateway; a rejected body never reaches the
/// upstream model.
pub async fn ask(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let query = match body {
        Ok(Json(body)) => dto::ask_query(&body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable ask body");
            None
        }
    };
    let Some(query) = query else {
        return AskFailure::BadRequest.into_response();
    };

    let result = match services.gateway().ask(&query).await {
        Ok(result) => result,
        Err(err) => {
            let failure = AskFailure::classify(&err);
            tracing::error!(error = %err, outcome = ?failure, "ask failed");
            return failure.into_response();
        }
    };

    let products = services.catalog().reconcile(&result.product_ids);
    if products.len() != result.product_ids.len() {
        tracing::debug!(
            requested = result.product_ids.len(),
            matched = products.len(),
            "dropped ids not present in catalog"
        );
    }

    (
        StatusCode::OK,
        Json(dto::AskResponse {
            products,
            summary: result.summary,
        }),
    )
        .into_response()
}
