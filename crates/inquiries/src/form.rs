use serde::{Deserialize, Serialize};

use storefront_catalog::CatalogStore;
use storefront_core::{DomainError, DomainResult};

/// Contact page form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> DomainResult<()> {
        min_chars("name", &self.name, 2, "name is required")?;
        email("email", &self.email)?;
        min_chars("subject", &self.subject, 2, "subject is required")?;
        min_chars("message", &self.message, 10, "message must be at least 10 characters")?;
        Ok(())
    }
}

/// Inquiry about a specific product, optionally for one of its sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInquiry {
    pub product_slug: String,
    #[serde(default)]
    pub size: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ProductInquiry {
    /// Validate the fields, then check the product and size against `catalog`.
    ///
    /// An unknown product is `NotFound`; a size the product does not offer is a
    /// validation failure.
    pub fn validate<S: CatalogStore + ?Sized>(&self, catalog: &S) -> DomainResult<()> {
        min_chars("name", &self.name, 2, "name is required")?;
        email("email", &self.email)?;
        min_chars("message", &self.message, 10, "please provide more details about your inquiry")?;

        let product = catalog.find_by_slug(&self.product_slug)?;
        if let Some(size) = self.size.as_deref() {
            if !product.has_size(size) {
                return Err(DomainError::validation(format!(
                    "size: {} is not offered in size {size}",
                    product.name
                )));
            }
        }
        Ok(())
    }
}

/// Newsletter signup: just an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> DomainResult<()> {
        email("email", &self.email)
    }
}

/// Length in characters, surrounding whitespace included.
fn min_chars(field: &str, value: &str, min: usize, reason: &str) -> DomainResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::validation(format!("{field}: {reason}")));
    }
    Ok(())
}

fn email(field: &str, value: &str) -> DomainResult<()> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(DomainError::validation(format!("{field}: valid email is required")))
    }
}

/// Structural check: `local@domain.tld`, no whitespace, alphabetic TLD of 2+.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-')) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}
