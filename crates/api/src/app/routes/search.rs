use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, AppState};

/// GET /search?q=silk
///
/// Instant-search preview: at most four matches in catalog order, nothing
/// below two characters, plus a `view_all` link into `/shop`.
pub async fn instant_search(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let result = storefront_catalog::instant_search(&state.catalog, &params.q, &state.search_memo);
    (StatusCode::OK, Json(dto::SearchResponse::from(&result))).into_response()
}
