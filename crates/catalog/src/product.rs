use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, Slug};

use crate::size::SizeLabel;

/// Price in whole currency units (AUD, no sub-unit tracking).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Display form used on every surface: `$1,250`.
    pub fn formatted(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// A catalog product. Read-only once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: Slug,
    pub name: String,
    pub subtitle: String,
    pub price: Price,
    /// Free-form grouping label; not a closed set.
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub sizes: Vec<SizeLabel>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "new", default)]
    pub is_new: bool,
}

impl Product {
    /// Canonical image, if any. Callers render a placeholder on `None`.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_size(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s.as_str() == label)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Category entry from the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(name: &str, price: u64, featured: bool, is_new: bool, sizes: &[&str]) -> Product {
        let slug = name.to_lowercase().replace(' ', "-");
        Product {
            id: ProductId::new(format!("id-{slug}")),
            slug: Slug::parse(slug).unwrap(),
            name: name.to_string(),
            subtitle: String::new(),
            price: Price::new(price),
            category: "apparel".to_string(),
            description: String::new(),
            details: vec![],
            sizes: sizes.iter().map(|s| SizeLabel::new(*s)).collect(),
            images: vec![],
            featured,
            is_new,
        }
    }

    /// The three-product catalog used throughout the query tests. The shared
    /// category is one no scenario term matches.
    pub fn scenario_catalog() -> Vec<Product> {
        vec![
            product("Silk Kurtha", 120, true, false, &["S", "M"]),
            product("Velvet Wrap", 200, false, true, &["M", "L"]),
            product("Cotton Kurtha", 80, true, true, &["S", "L"]),
        ]
    }
}
