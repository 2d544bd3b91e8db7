use serde::{Deserialize, Serialize};

use storefront_catalog::{BrowseResult, Category, InstantSearchResult, Product, SizeLabel};

// -------------------------
// Request DTOs
// -------------------------

/// `GET /products` query string. Mirrors the shop page's URL and in-page inputs.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub search: Option<String>,
    /// Only the literal `true` enables the new-arrivals filter.
    pub new: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

/// `GET /search` query string.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductView<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
    pub subtitle: &'a str,
    pub price: u64,
    pub formatted_price: String,
    pub category: &'a str,
    pub description: &'a str,
    pub details: &'a [String],
    pub sizes: &'a [SizeLabel],
    pub images: &'a [String],
    pub cover_image: Option<&'a str>,
    pub featured: bool,
    pub new: bool,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: p.id.as_str(),
            slug: p.slug.as_str(),
            name: &p.name,
            subtitle: &p.subtitle,
            price: p.price.amount(),
            formatted_price: p.price.formatted(),
            category: &p.category,
            description: &p.description,
            details: &p.details,
            sizes: &p.sizes,
            images: &p.images,
            cover_image: p.cover_image(),
            featured: p.featured,
            new: p.is_new,
        }
    }
}

pub fn product_views<'a, I>(products: I) -> Vec<ProductView<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(ProductView::from).collect()
}

#[derive(Debug, Serialize)]
pub struct AppliedQuery<'a> {
    pub search: &'a str,
    pub new: bool,
    pub size: Option<&'a str>,
    pub sort: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse<'a> {
    pub query: AppliedQuery<'a>,
    pub count: usize,
    pub empty: bool,
    pub available_sizes: &'a [SizeLabel],
    pub items: Vec<ProductView<'a>>,
}

impl<'a> From<&'a BrowseResult> for BrowseResponse<'a> {
    fn from(r: &'a BrowseResult) -> Self {
        Self {
            query: AppliedQuery {
                search: &r.spec.term,
                new: r.spec.new_only,
                size: r.spec.size.as_deref(),
                sort: r.spec.sort.as_str(),
            },
            count: r.count(),
            empty: r.is_empty(),
            available_sizes: &r.available_sizes,
            items: product_views(r.items.iter()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub term: &'a str,
    pub active: bool,
    pub items: Vec<ProductView<'a>>,
    pub view_all: Option<&'a str>,
}

impl<'a> From<&'a InstantSearchResult> for SearchResponse<'a> {
    fn from(r: &'a InstantSearchResult) -> Self {
        Self {
            term: &r.term,
            active: r.active,
            items: product_views(r.items.iter()),
            view_all: r.view_all.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse<'a> {
    pub product: ProductView<'a>,
    pub related: Vec<ProductView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse<'a> {
    pub items: &'a [Category],
}
