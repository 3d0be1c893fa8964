//! Response mapping for everything that can go wrong while handling a
//! request.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use market_core::models::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// The error half of every handler's return type. Each variant renders as
/// the status code and JSON body the API contract promises.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400; the body is the field→messages map itself
    #[error("validation failed")]
    Validation(FieldErrors),
    /// 404, carrying the missing entity's display name
    #[error("{0} not found")]
    NotFound(&'static str),
    /// 405, carrying the offending verb
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),
    /// 500; the cause has already been logged at the call site
    #[error("a server error occurred")]
    Internal,
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{entity} not found") })),
            )
                .into_response(),
            Self::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "detail": format!("Method \"{method}\" not allowed.") })),
            )
                .into_response(),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "A server error occurred." })),
            )
                .into_response(),
        }
    }
}

/// The fallback for any verb a resource router has no handler for. Axum's
/// built-in 405 has an empty body; the contract wants one naming the verb.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}
