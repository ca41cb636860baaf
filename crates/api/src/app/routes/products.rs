use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::ProductQuery;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:slug", get(get_product))
}

/// `GET /api/products?category=<name>&sort=newest|price-asc|price-desc`
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::debug!("rejected product query: {rejection}");
            return errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let products = services.catalog.query_products(&query);
    tracing::debug!(count = products.len(), category = ?query.category(), sort = ?query.sort, "listing products");
    Json(products).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match services.catalog.get_product_by_slug(&slug) {
        Some(product) => Json(product).into_response(),
        None => {
            tracing::debug!(%slug, "product not found");
            errors::json_error(StatusCode::NOT_FOUND, "Product not found")
        }
    }
}
