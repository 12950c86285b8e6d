//! Catalog browsing commands.

use modernshop_storefront::{CatalogStore, filter_products, fixtures};

/// Print the sample catalog, filtered by search text and category.
#[allow(clippy::print_stdout)]
pub fn list(search: &str, category: Option<&str>) {
    let mut catalog = CatalogStore::new();
    fixtures::seed(&mut catalog);

    let hits = filter_products(catalog.products(), search, category);
    if hits.is_empty() {
        println!("No products match.");
        return;
    }

    for product in hits {
        // Money's Display ignores width flags; render it first.
        let price = product.price.to_string();
        println!(
            "{:<32} {price:>8}  {:<12} stock {:>3}",
            product.name, product.category, product.stock
        );
    }
}

/// Print the distinct category names.
#[allow(clippy::print_stdout)]
pub fn categories() {
    let mut catalog = CatalogStore::new();
    fixtures::seed(&mut catalog);

    for category in catalog.categories() {
        println!("{category}");
    }
}
