//! Catalog query engine: text filter, new-arrivals filter, size filter, sort.
//!
//! `run_query` is a pure function of its inputs. Stages always run in the same
//! order, so the sort only ever sees the already-reduced set.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Result ordering requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    /// Parse a wire value; anything unrecognized means `featured`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "newest" => SortKey::Newest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Featured,
        }
    }
}

/// One interaction's worth of query input. Built fresh, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QuerySpec {
    /// Free-text term; empty means no text filter.
    pub term: String,
    pub new_only: bool,
    /// Exact size label; `None` means no size filter.
    pub size: Option<String>,
    pub sort: SortKey,
}

impl QuerySpec {
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn new_only(mut self, new_only: bool) -> Self {
        self.new_only = new_only;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Per-surface engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryOptions {
    /// Terms shorter than this (in characters) do not filter. Treated as at least 1.
    pub min_term_len: usize,
    /// When false, results keep their filtered catalog order.
    pub apply_sort: bool,
    pub limit: Option<usize>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            min_term_len: 1,
            apply_sort: true,
            limit: None,
        }
    }
}

impl QueryOptions {
    /// Whether `term` is long enough to activate the text filter.
    pub fn term_is_active(&self, term: &str) -> bool {
        let len = term.chars().count();
        len > 0 && len >= self.min_term_len
    }
}

/// Filter and order `products` according to `spec`.
///
/// Never mutates `products`; the result borrows from it and is never longer.
pub fn run_query<'a>(products: &'a [Product], spec: &QuerySpec, opts: &QueryOptions) -> Vec<&'a Product> {
    let needle = opts
        .term_is_active(&spec.term)
        .then(|| spec.term.to_lowercase());

    let mut results: Vec<&Product> = products
        .iter()
        .filter(|p| needle.as_deref().is_none_or(|n| matches_term(p, n)))
        .filter(|p| !spec.new_only || p.is_new)
        .filter(|p| spec.size.as_deref().is_none_or(|s| p.has_size(s)))
        .collect();

    if opts.apply_sort {
        sort_products(&mut results, spec.sort);
    }

    if let Some(limit) = opts.limit {
        results.truncate(limit);
    }

    tracing::debug!(
        term = %spec.term,
        new_only = spec.new_only,
        size = ?spec.size,
        sort = spec.sort.as_str(),
        text_filter = needle.is_some(),
        matched = results.len(),
        "catalog query"
    );

    results
}

/// `needle` must already be lowercased.
fn matches_term(product: &Product, needle: &str) -> bool {
    [
        &product.name,
        &product.description,
        &product.subtitle,
        &product.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

// `sort_by` is stable, so equal keys keep their filtered order.
fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Featured => products.sort_by_key(|p| !p.featured),
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        SortKey::PriceLow => products.sort_by_key(|p| p.price),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}
