use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use storefront_catalog::CatalogStore;

use crate::app::{dto, AppState};

pub async fn list_categories(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let body = dto::CategoriesResponse {
        items: state.catalog.categories(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
