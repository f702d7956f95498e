use axum::{Json, response::IntoResponse};
use chrono::{SecondsFormat, Utc};

use crate::app::dto::HealthResponse;

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn banner() -> &'static str {
    "Backend running successfully 😄"
}
