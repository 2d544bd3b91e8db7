//! Catalog domain module (static, read-only).
//!
//! This crate contains the product catalog and the query engine that the shop
//! and instant-search surfaces share, implemented purely as deterministic
//! domain logic (no HTTP, no persistence). The only IO is reading the catalog
//! document once at start-up.

pub mod product;
pub mod query;
pub mod selection;
pub mod size;
pub mod store;
pub mod surface;

pub use product::{Category, Price, Product};
pub use query::{run_query, QueryOptions, QuerySpec, SortKey};
pub use selection::{featured_products, related_products, RELATED_LIMIT};
pub use size::{available_sizes, SizeLabel, SIZE_DOMAIN};
pub use store::{Catalog, CatalogDocument, CatalogLoadError, CatalogStore};
pub use surface::{
    browse, browse_spec, instant_search, BrowseResult, InstantSearchResult, QueryMemo, Surface,
};
