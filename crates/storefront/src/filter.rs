//! Product filtering.
//!
//! A single pure function over a catalog snapshot. The storefront's product
//! grid and the CLI both call this; it never mutates and never re-sorts.

use crate::catalog::Product;

/// Filter products by search text and category.
///
/// A product is included iff both predicates hold:
///
/// - **Search**: empty text matches everything; otherwise the text must be a
///   case-insensitive substring of the product's name or description.
/// - **Category**: `None` matches everything; `Some(c)` requires exact,
///   case-sensitive equality with the product's category.
///
/// Input order is preserved (stable filter). Deterministic for identical
/// inputs.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let search = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            search.is_empty()
                || p.name.to_lowercase().contains(&search)
                || p.description.to_lowercase().contains(&search)
        })
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}
