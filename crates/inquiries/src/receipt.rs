use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Contact,
    ProductInquiry,
    Newsletter,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact",
            SubmissionKind::ProductInquiry => "product_inquiry",
            SubmissionKind::Newsletter => "newsletter",
        }
    }

    /// Default artificial latency for the simulated submission.
    pub fn default_delay(&self) -> Duration {
        match self {
            SubmissionKind::Contact | SubmissionKind::ProductInquiry => Duration::from_millis(2000),
            SubmissionKind::Newsletter => Duration::from_millis(1500),
        }
    }
}

/// Acknowledgement returned once a simulated submission completes.
///
/// Submissions never fail after validation; there is no retry or cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub kind: SubmissionKind,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl Receipt {
    pub fn issue(kind: SubmissionKind, received_at: DateTime<Utc>) -> Self {
        let message = match kind {
            SubmissionKind::Contact => "Thank you for reaching out. We'll be in touch within 24 hours.",
            SubmissionKind::ProductInquiry => "Thank you for your inquiry. We'll get back to you shortly.",
            SubmissionKind::Newsletter => "Welcome to the family. Watch your inbox for new arrivals.",
        };

        tracing::info!(kind = kind.as_str(), %received_at, "simulated submission accepted");

        Self {
            kind,
            received_at,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_match_form_kind() {
        assert_eq!(SubmissionKind::Contact.default_delay(), Duration::from_millis(2000));
        assert_eq!(SubmissionKind::ProductInquiry.default_delay(), Duration::from_millis(2000));
        assert_eq!(SubmissionKind::Newsletter.default_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn receipt_serializes_kind_in_snake_case() {
        let at = Utc::now();
        let receipt = Receipt::issue(SubmissionKind::ProductInquiry, at);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["kind"], "product_inquiry");
        assert_eq!(receipt.received_at, at);
        assert!(!receipt.message.is_empty());
    }
}
