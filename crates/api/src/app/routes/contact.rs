use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use storefront_contact::NewContactMessage;

use crate::app::dto::ContactAccepted;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(submit_contact))
}

pub async fn submit_contact(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewContactMessage>, JsonRejection>,
) -> axum::response::Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!("rejected contact body: {rejection}");
            return errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match storefront_contact::submit(services.contacts.as_ref(), input, Utc::now()) {
        Ok(_) => (StatusCode::CREATED, Json(ContactAccepted { success: true })).into_response(),
        Err(e) => errors::contact_error_to_response(e),
    }
}
