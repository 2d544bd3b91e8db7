use storefront_catalog::{Catalog, QueryMemo};

use crate::config::SubmissionDelays;

/// Shared, read-only application state.
///
/// The catalog is never mutated after load; the memos only cache derived
/// query results.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub browse_memo: QueryMemo,
    pub search_memo: QueryMemo,
    pub delays: SubmissionDelays,
}

impl AppState {
    pub fn new(catalog: Catalog, delays: SubmissionDelays) -> Self {
        Self {
            catalog,
            browse_memo: QueryMemo::new(),
            search_memo: QueryMemo::new(),
            delays,
        }
    }
}
