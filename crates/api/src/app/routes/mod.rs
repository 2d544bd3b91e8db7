use axum::{routing::{get, post}, Router};

pub mod categories;
pub mod inquiries;
pub mod products;
pub mod search;
pub mod system;

/// Router for all catalog and form endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/search", get(search::instant_search))
        .route("/categories", get(categories::list_categories))
        .route("/contact", post(inquiries::submit_contact))
        .route("/inquiries", post(inquiries::submit_inquiry))
        .route("/newsletter", post(inquiries::submit_newsletter))
}
