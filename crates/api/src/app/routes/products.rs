use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_catalog::{
    browse, browse_spec, featured_products, related_products, CatalogStore, RELATED_LIMIT,
};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/featured", get(list_featured))
        .route("/:slug", get(get_product))
}

/// GET /products?search=silk&new=true&size=M&sort=price-low
///
/// Full-catalog view. Every parameter is optional; an empty result is a
/// normal 200 with `empty: true`.
pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::BrowseParams>,
) -> axum::response::Response {
    let spec = browse_spec(
        params.search.as_deref(),
        params.new.as_deref(),
        params.size.as_deref(),
        params.sort.as_deref(),
    );
    let result = browse(&state.catalog, spec, &state.browse_memo);

    (StatusCode::OK, Json(dto::BrowseResponse::from(&result))).into_response()
}

pub async fn list_featured(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let items = dto::product_views(featured_products(state.catalog.all()));
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    let product = match state.catalog.find_by_slug(&slug) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(%slug, "unknown product slug");
            return errors::domain_error_to_response(e);
        }
    };

    let related = related_products(state.catalog.all(), product, RELATED_LIMIT);
    let body = dto::ProductDetailResponse {
        product: dto::ProductView::from(product),
        related: dto::product_views(related),
    };
    (StatusCode::OK, Json(body)).into_response()
}
