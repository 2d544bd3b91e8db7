//! The two catalog surfaces: the capped instant-search preview and the full
//! browse grid. Both run the same engine with different parameters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::product::Product;
use crate::query::{run_query, QueryOptions, QuerySpec, SortKey};
use crate::size::{available_sizes, SizeLabel};
use crate::store::{Catalog, CatalogStore};

/// Which caller is querying the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    InstantSearch,
    Browse,
}

impl Surface {
    /// Preview cap for the instant-search overlay.
    pub const INSTANT_SEARCH_LIMIT: usize = 4;
    /// Minimum term length before the overlay searches.
    pub const INSTANT_SEARCH_MIN_TERM: usize = 2;

    pub fn options(&self) -> QueryOptions {
        match self {
            Surface::InstantSearch => QueryOptions {
                min_term_len: Self::INSTANT_SEARCH_MIN_TERM,
                apply_sort: false,
                limit: Some(Self::INSTANT_SEARCH_LIMIT),
            },
            Surface::Browse => QueryOptions {
                min_term_len: 1,
                apply_sort: true,
                limit: None,
            },
        }
    }

    /// Run the engine for this surface, memoized on `(catalog, surface, spec)`.
    pub fn query(&self, catalog: &Catalog, spec: &QuerySpec, memo: &QueryMemo) -> Arc<Vec<Product>> {
        let key = MemoKey {
            revision: catalog.revision(),
            surface: *self,
            spec: spec.clone(),
        };
        memo.get_or_compute(key, || {
            run_query(catalog.all(), spec, &self.options())
                .into_iter()
                .cloned()
                .collect()
        })
    }
}

/// Everything a memoized result depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    revision: u64,
    surface: Surface,
    spec: QuerySpec,
}

/// Single-slot memo: remembers the last query and its result.
///
/// A repeated identical query against the same catalog is served without
/// re-running the engine. Any change to the catalog, surface or spec
/// recomputes and replaces the slot. The engine runs outside the lock, so
/// concurrent misses compute in parallel and the last one to finish wins
/// the slot.
#[derive(Debug, Default)]
pub struct QueryMemo {
    last: Mutex<Option<(MemoKey, Arc<Vec<Product>>)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryMemo {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<(MemoKey, Arc<Vec<Product>>)>> {
        match self.last.lock() {
            Ok(slot) => slot,
            // The slot only ever holds a complete entry, so a poisoned lock is still usable.
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn get_or_compute<F>(&self, key: MemoKey, compute: F) -> Arc<Vec<Product>>
    where
        F: FnOnce() -> Vec<Product>,
    {
        let cached = match self.slot().as_ref() {
            Some((k, result)) if *k == key => Some(Arc::clone(result)),
            _ => None,
        };
        if let Some(result) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return result;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(compute());
        *self.slot() = Some((key, Arc::clone(&result)));
        result
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// Full-catalog view output.
#[derive(Debug, Clone)]
pub struct BrowseResult {
    pub spec: QuerySpec,
    pub items: Arc<Vec<Product>>,
    /// Filter chips, drawn from the whole catalog rather than the result.
    pub available_sizes: Vec<SizeLabel>,
}

impl BrowseResult {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Empty state: a valid outcome, rendered as "no products found".
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Instant-search overlay output.
#[derive(Debug, Clone)]
pub struct InstantSearchResult {
    pub term: String,
    /// Whether the term reached the minimum length.
    pub active: bool,
    pub items: Arc<Vec<Product>>,
    /// Link to the uncapped browse view for the same term.
    pub view_all: Option<String>,
}

/// Build the browse spec from navigation and in-page inputs.
///
/// `new` arrives as the raw `new` query parameter; only `"true"` enables it.
pub fn browse_spec(search: Option<&str>, new: Option<&str>, size: Option<&str>, sort: Option<&str>) -> QuerySpec {
    QuerySpec {
        term: search.unwrap_or_default().to_string(),
        new_only: new == Some("true"),
        size: size.filter(|s| !s.is_empty()).map(str::to_string),
        sort: sort.map(SortKey::parse_lenient).unwrap_or_default(),
    }
}

pub fn browse(catalog: &Catalog, spec: QuerySpec, memo: &QueryMemo) -> BrowseResult {
    let items = Surface::Browse.query(catalog, &spec, memo);
    BrowseResult {
        spec,
        items,
        available_sizes: available_sizes(catalog.all()),
    }
}

pub fn instant_search(catalog: &Catalog, term: &str, memo: &QueryMemo) -> InstantSearchResult {
    let surface = Surface::InstantSearch;
    let active = surface.options().term_is_active(term);

    // The overlay shows nothing until the term is long enough.
    let items = if active {
        let spec = QuerySpec::default().with_term(term);
        surface.query(catalog, &spec, memo)
    } else {
        Arc::new(Vec::new())
    };

    let trimmed = term.trim();
    let view_all = (!trimmed.is_empty()).then(|| format!("/shop?search={}", urlencoding::encode(term)));

    InstantSearchResult {
        term: term.to_string(),
        active,
        items,
        view_all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::{product, scenario_catalog};

    fn names(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    fn catalog_of(products: Vec<Product>) -> Catalog {
        Catalog::new(products, vec![]).unwrap()
    }

    fn scenario() -> Catalog {
        catalog_of(scenario_catalog())
    }

    fn wide_catalog() -> Catalog {
        catalog_of(
            (0..7)
                .map(|i| product(&format!("Silk Piece {i}"), 100 - i, i % 2 == 0, false, &["M"]))
                .collect(),
        )
    }

    #[test]
    fn instant_search_caps_and_keeps_catalog_order() {
        let catalog = wide_catalog();
        let memo = QueryMemo::new();
        let out = instant_search(&catalog, "silk", &memo);
        assert!(out.active);
        assert_eq!(
            names(&out.items),
            vec!["Silk Piece 0", "Silk Piece 1", "Silk Piece 2", "Silk Piece 3"]
        );
        assert_eq!(out.view_all.as_deref(), Some("/shop?search=silk"));
    }

    #[test]
    fn instant_search_below_threshold_is_empty_preview() {
        let catalog = scenario();
        let memo = QueryMemo::new();
        let out = instant_search(&catalog, "s", &memo);
        assert!(!out.active);
        assert!(out.items.is_empty());
        assert_eq!(out.view_all.as_deref(), Some("/shop?search=s"));
        assert_eq!(memo.misses(), 0);

        let blank = instant_search(&catalog, "  ", &memo);
        assert_eq!(blank.view_all, None);
    }

    #[test]
    fn view_all_link_is_percent_encoded() {
        let out = instant_search(&scenario(), "lk ku&", &QueryMemo::new());
        assert_eq!(out.view_all.as_deref(), Some("/shop?search=lk%20ku%26"));
        assert_eq!(names(&out.items), vec![] as Vec<&str>);
    }

    #[test]
    fn browse_is_uncapped_and_sorted() {
        let catalog = wide_catalog();
        let memo = QueryMemo::new();
        let spec = browse_spec(Some("silk"), None, None, Some("price-low"));
        let out = browse(&catalog, spec, &memo);
        assert_eq!(out.count(), 7);
        assert_eq!(out.items[0].name, "Silk Piece 6");
        assert!(!out.is_empty());
    }

    #[test]
    fn browse_reports_empty_state_and_catalog_sizes() {
        let catalog = scenario();
        let out = browse(&catalog, browse_spec(Some("denim"), None, None, None), &QueryMemo::new());
        assert!(out.is_empty());
        assert_eq!(out.count(), 0);
        let sizes: Vec<_> = out.available_sizes.iter().map(SizeLabel::as_str).collect();
        assert_eq!(sizes, vec!["S", "M", "L"]);
    }

    #[test]
    fn browse_spec_reads_navigation_inputs() {
        let spec = browse_spec(Some("wrap"), Some("true"), Some("L"), Some("newest"));
        assert_eq!(spec.term, "wrap");
        assert!(spec.new_only);
        assert_eq!(spec.size.as_deref(), Some("L"));
        assert_eq!(spec.sort, SortKey::Newest);

        let defaults = browse_spec(None, Some("yes"), Some(""), Some("bogus"));
        assert_eq!(defaults, QuerySpec::default());
    }

    #[test]
    fn memo_serves_repeat_queries_and_recomputes_on_change() {
        let catalog = scenario();
        let memo = QueryMemo::new();
        let spec = browse_spec(None, Some("true"), None, None);

        let first = browse(&catalog, spec.clone(), &memo);
        let second = browse(&catalog, spec.clone(), &memo);
        assert!(Arc::ptr_eq(&first.items, &second.items));
        assert_eq!((memo.hits(), memo.misses()), (1, 1));

        let changed = browse(&catalog, spec.sorted_by(SortKey::PriceHigh), &memo);
        assert_eq!(memo.misses(), 2);
        assert_eq!(names(&changed.items), vec!["Velvet Wrap", "Cotton Kurtha"]);
    }

    #[test]
    fn memo_distinguishes_surfaces() {
        let catalog = scenario();
        let memo = QueryMemo::new();
        let spec = QuerySpec::default().with_term("kurtha");

        let browse_items = Surface::Browse.query(&catalog, &spec, &memo);
        let instant_items = Surface::InstantSearch.query(&catalog, &spec, &memo);
        assert_eq!(memo.misses(), 2);
        assert_eq!(browse_items.len(), instant_items.len());
    }

    #[test]
    fn memo_shared_across_catalogs_never_mixes_results() {
        let first = scenario();
        let second = catalog_of(vec![product("Denim Jacket", 150, false, false, &["XL"])]);
        let memo = QueryMemo::new();
        let spec = QuerySpec::default();

        let a = browse(&first, spec.clone(), &memo);
        assert_eq!(names(&a.items), vec!["Silk Kurtha", "Cotton Kurtha", "Velvet Wrap"]);

        let b = browse(&second, spec.clone(), &memo);
        assert_eq!(names(&b.items), vec!["Denim Jacket"]);
        let sizes: Vec<_> = b.available_sizes.iter().map(SizeLabel::as_str).collect();
        assert_eq!(sizes, vec!["XL"]);
        assert_eq!((memo.hits(), memo.misses()), (0, 2));

        // A clone has the same contents, so it may reuse the slot.
        let c = browse(&second.clone(), spec, &memo);
        assert!(Arc::ptr_eq(&b.items, &c.items));
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn concurrent_queries_share_one_memo() {
        let catalog = Arc::new(wide_catalog());
        let memo = Arc::new(QueryMemo::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                let memo = Arc::clone(&memo);
                std::thread::spawn(move || {
                    let sort = if i % 2 == 0 { "price-low" } else { "price-high" };
                    let out = browse(&catalog, browse_spec(Some("silk"), None, None, Some(sort)), &memo);
                    (sort, out.items[0].name.clone())
                })
            })
            .collect();

        for handle in handles {
            let (sort, first) = handle.join().unwrap();
            let expected = if sort == "price-low" { "Silk Piece 6" } else { "Silk Piece 0" };
            assert_eq!(first, expected);
        }
        assert_eq!(memo.hits() + memo.misses(), 8);
    }
}
