//! Size labels and their presentation order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The known size domain, in presentation order.
pub const SIZE_DOMAIN: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// A size label as it appears in the catalog.
///
/// Ordering follows [`SIZE_DOMAIN`]; labels outside the domain sort after every
/// known label and alphabetically among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeLabel(String);

impl SizeLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position in [`SIZE_DOMAIN`], or `None` for an unknown label.
    pub fn rank(&self) -> Option<usize> {
        SIZE_DOMAIN.iter().position(|known| *known == self.0)
    }

    pub fn is_known(&self) -> bool {
        self.rank().is_some()
    }
}

impl Ord for SizeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SizeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct sizes offered across `products`, in presentation order.
///
/// This drives the filter chips; it never reorders products.
pub fn available_sizes<'a, I>(products: I) -> Vec<SizeLabel>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .flat_map(|p| p.sizes.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
