//! Fixed selections shown outside the shop grid (home page, detail page).

use crate::product::Product;

/// Maximum number of related products on the detail view.
pub const RELATED_LIMIT: usize = 3;

/// Featured products, in catalog order.
pub fn featured_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}

/// Other products from the same category as `product`, in catalog order.
pub fn related_products<'a>(products: &'a [Product], product: &Product, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}
