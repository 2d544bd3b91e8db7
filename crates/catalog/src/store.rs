//! Catalog store: the immutable product collection loaded once at start-up.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use thiserror::Error;

use storefront_core::{DomainError, DomainResult};

use crate::product::{Category, Product};

/// Catalog document shipped with the build.
const PACKAGED_CATALOG: &str = include_str!("../../../data/catalog.json");

/// On-disk shape of the catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Failure to load the catalog. Always fatal at start-up.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    #[error("duplicate product slug: {0}")]
    DuplicateSlug(String),

    #[error("product {product} has no sizes")]
    NoSizes { product: String },

    #[error("product {product} lists size {size} more than once")]
    DuplicateSize { product: String, size: String },

    #[error("product {product} lists unknown size {size}")]
    UnknownSize { product: String, size: String },
}

/// Read access to the catalog.
pub trait CatalogStore: Send + Sync {
    /// Every product, in catalog order. Same contents on every call.
    fn all(&self) -> &[Product];

    fn categories(&self) -> &[Category];

    /// Look up the detail-view product for `slug`.
    fn find_by_slug(&self, slug: &str) -> DomainResult<&Product>;
}

/// Source of catalog revisions; never reused within a process.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Validated, immutable catalog.
///
/// Every constructed catalog gets its own revision. Clones share it, which is
/// sound because the contents can never change after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    revision: u64,
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, enforcing the product invariants.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogLoadError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for p in &products {
            if !ids.insert(p.id.as_str()) {
                return Err(CatalogLoadError::DuplicateId(p.id.to_string()));
            }
            if !slugs.insert(p.slug.as_str()) {
                return Err(CatalogLoadError::DuplicateSlug(p.slug.to_string()));
            }
            if p.sizes.is_empty() {
                return Err(CatalogLoadError::NoSizes {
                    product: p.slug.to_string(),
                });
            }

            let mut seen = HashSet::new();
            for size in &p.sizes {
                if !size.is_known() {
                    return Err(CatalogLoadError::UnknownSize {
                        product: p.slug.to_string(),
                        size: size.to_string(),
                    });
                }
                if !seen.insert(size.as_str()) {
                    return Err(CatalogLoadError::DuplicateSize {
                        product: p.slug.to_string(),
                        size: size.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
            products,
            categories,
        })
    }

    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogLoadError> {
        Self::new(doc.products, doc.categories)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// The catalog built into the binary.
    pub fn packaged() -> Result<Self, CatalogLoadError> {
        Self::from_json(PACKAGED_CATALOG)
    }

    /// Load the override document at `path`, or the packaged one.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        let catalog = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&json)?
            }
            None => Self::packaged()?,
        };

        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "packaged".to_string()),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Identity of this catalog's contents, used to key cached query results.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogStore for Catalog {
    fn all(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn find_by_slug(&self, slug: &str) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.slug.as_str() == slug)
            .ok_or_else(DomainError::not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::{product, scenario_catalog};
    use crate::size::SizeLabel;

    #[test]
    fn packaged_catalog_is_valid() {
        let catalog = Catalog::packaged().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.categories().is_empty());
        assert!(catalog.all().iter().any(|p| p.featured));
        assert!(catalog.all().iter().any(|p| p.is_new));
    }

    #[test]
    fn all_is_stable_across_calls() {
        let catalog = Catalog::new(scenario_catalog(), vec![]).unwrap();
        assert_eq!(catalog.all(), catalog.all());
        assert_eq!(catalog.all(), scenario_catalog().as_slice());
    }

    #[test]
    fn each_catalog_has_its_own_revision() {
        let a = Catalog::new(scenario_catalog(), vec![]).unwrap();
        let b = Catalog::new(scenario_catalog(), vec![]).unwrap();
        assert_ne!(a.revision(), b.revision());
        assert_eq!(a.clone().revision(), a.revision());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_json(r#"{"products": [], "categories": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn find_by_slug_returns_product_or_not_found() {
        let catalog = Catalog::new(scenario_catalog(), vec![]).unwrap();
        assert_eq!(catalog.find_by_slug("velvet-wrap").unwrap().name, "Velvet Wrap");
        assert_eq!(catalog.find_by_slug("missing"), Err(DomainError::NotFound));
    }

    #[test]
    fn rejects_duplicate_ids_and_slugs() {
        let mut dup_id = scenario_catalog();
        dup_id[1].id = dup_id[0].id.clone();
        assert!(matches!(
            Catalog::new(dup_id, vec![]),
            Err(CatalogLoadError::DuplicateId(_))
        ));

        let mut dup_slug = scenario_catalog();
        dup_slug[2].slug = dup_slug[0].slug.clone();
        assert!(matches!(
            Catalog::new(dup_slug, vec![]),
            Err(CatalogLoadError::DuplicateSlug(_))
        ));
    }

    #[test]
    fn rejects_bad_size_sets() {
        let empty = vec![product("Wrap", 10, false, false, &[])];
        assert!(matches!(Catalog::new(empty, vec![]), Err(CatalogLoadError::NoSizes { .. })));

        let dup = vec![product("Wrap", 10, false, false, &["M", "M"])];
        assert!(matches!(
            Catalog::new(dup, vec![]),
            Err(CatalogLoadError::DuplicateSize { .. })
        ));

        let mut unknown = vec![product("Wrap", 10, false, false, &["M"])];
        unknown[0].sizes.push(SizeLabel::new("Free"));
        assert!(matches!(
            Catalog::new(unknown, vec![]),
            Err(CatalogLoadError::UnknownSize { .. })
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogLoadError::Parse(_))));
        let bad_slug = r#"{"products":[{"id":"1","slug":"Not Safe","name":"A","subtitle":"",
            "price":1,"category":"c","description":"","sizes":["S"]}]}"#;
        assert!(matches!(Catalog::from_json(bad_slug), Err(CatalogLoadError::Parse(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn load_without_path_uses_packaged_catalog() {
        let loaded = Catalog::load(None).unwrap();
        assert_eq!(loaded.len(), Catalog::packaged().unwrap().len());
    }
}
