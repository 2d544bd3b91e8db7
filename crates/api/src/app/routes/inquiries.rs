use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use storefront_core::DomainResult;
use storefront_inquiries::{ContactForm, NewsletterSignup, ProductInquiry, Receipt, SubmissionKind};

use crate::app::{errors, AppState};

pub async fn submit_contact(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<ContactForm>,
) -> axum::response::Response {
    submit(&state, SubmissionKind::Contact, body.validate()).await
}

pub async fn submit_inquiry(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<ProductInquiry>,
) -> axum::response::Response {
    let validated = body.validate(&state.catalog);
    submit(&state, SubmissionKind::ProductInquiry, validated).await
}

pub async fn submit_newsletter(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<NewsletterSignup>,
) -> axum::response::Response {
    submit(&state, SubmissionKind::Newsletter, body.validate()).await
}

/// Simulated submission: reject invalid input immediately, otherwise wait the
/// configured delay and always accept. Nothing leaves the process.
async fn submit(state: &AppState, kind: SubmissionKind, validated: DomainResult<()>) -> axum::response::Response {
    if let Err(e) = validated {
        tracing::debug!(kind = kind.as_str(), error = %e, "submission rejected");
        return errors::domain_error_to_response(e);
    }

    let delay = state.delays.for_kind(kind);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    (StatusCode::ACCEPTED, Json(Receipt::issue(kind, Utc::now()))).into_response()
}
