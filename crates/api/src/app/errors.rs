use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use discvr_ai::AiError;

/// `{ "error": message }` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

/// Terminal failure states of `POST /api/ask`.
///
/// Each carries a fixed user-facing message; upstream details are logged,
/// never returned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AskFailure {
    BadRequest,
    UpstreamBusy,
    UpstreamAuthFailure,
    UpstreamBadShape,
    GenericUpstreamFailure,
}

impl AskFailure {
    /// Classify a gateway failure. Rules apply in order: rate limit, auth,
    /// malformed output (or any message mentioning JSON), everything else.
    pub fn classify(err: &AiError) -> Self {
        if err.is_rate_limited() {
            Self::UpstreamBusy
        } else if err.is_auth_failure() {
            Self::UpstreamAuthFailure
        } else if err.is_malformed() || err.to_string().contains("JSON") {
            Self::UpstreamBadShape
        } else {
            Self::GenericUpstreamFailure
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::UpstreamBusy => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamAuthFailure | Self::UpstreamBadShape | Self::GenericUpstreamFailure => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "A non-empty 'query' field is required.",
            Self::UpstreamBusy => "AI service is temporarily busy. Please try again in a moment.",
            Self::UpstreamAuthFailure => "AI service configuration error. Please contact support.",
            Self::UpstreamBadShape => {
                "AI returned an unexpected response. Please try rephrasing your question."
            }
            Self::GenericUpstreamFailure => {
                "Unable to process your request right now. Please try again later."
            }
        }
    }
}

impl IntoResponse for AskFailure {
    fn into_response(self) -> Response {
        json_error(self.status(), self.message())
    }
}
