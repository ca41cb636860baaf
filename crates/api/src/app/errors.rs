use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_contact::ContactError;
use storefront_core::{DomainError, ValidationErrors};

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}

/// 400 carrying the first failing field and its message.
pub fn validation_error(errors: &ValidationErrors) -> axum::response::Response {
    match errors.first() {
        Some(first) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "message": first.message,
                "field": first.field,
            })),
        )
            .into_response(),
        None => json_error(StatusCode::BAD_REQUEST, "Invalid request"),
    }
}

pub fn contact_error_to_response(err: ContactError) -> axum::response::Response {
    match err {
        ContactError::Validation(errors) => validation_error(&errors),
        ContactError::Store(DomainError::Conflict(msg)) => json_error(StatusCode::CONFLICT, msg),
        ContactError::Store(e) => {
            tracing::error!("contact store failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message")
        }
    }
}
