//! Inquiries domain module (contact, product inquiry, newsletter).
//!
//! This crate contains the validation rules for the storefront's forms and the
//! receipt a simulated submission produces. Nothing is sent or stored.

pub mod form;
pub mod receipt;

pub use form::{ContactForm, NewsletterSignup, ProductInquiry};
pub use receipt::{Receipt, SubmissionKind};
