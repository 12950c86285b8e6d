//! Product catalog and favorites.
//!
//! [`CatalogStore`] owns the product list (insertion-ordered) and the set of
//! favorited product IDs. All catalog mutation funnels through its methods;
//! reads hand out snapshots of the post-mutation state, never partial views.

use std::collections::HashSet;

use modernshop_core::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A sellable product.
///
/// Immutable once stored except through [`CatalogStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price; non-negative.
    pub price: Money,
    pub category: String,
    pub image_url: String,
    /// Units available for sale.
    pub stock: u32,
    /// Ordered bullet-point specifications, as shown on the detail page.
    pub specifications: Vec<String>,
}

/// Input to [`CatalogStore::add`]: a product without an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub specifications: Vec<String>,
}

/// Partial update for [`CatalogStore::update`]; `Some` fields are applied,
/// `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub stock: Option<u32>,
    pub specifications: Option<Vec<String>>,
}

/// Owner of the product list and the favorites set.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    favorites: HashSet<ProductId>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, assigning it a fresh ID. Returns the stored product.
    pub fn add(&mut self, new: NewProduct) -> Product {
        let product = Product {
            id: ProductId::generate(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            image_url: new.image_url,
            stock: new.stock,
            specifications: new.specifications,
        };
        tracing::info!(product_id = %product.id, name = %product.name, "product added");
        self.products.push(product.clone());
        product
    }

    /// Merge `patch` into the product with the given ID.
    ///
    /// Silent no-op if the ID is not in the catalog.
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(image_url) = patch.image_url {
            product.image_url = image_url;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(specifications) = patch.specifications {
            product.specifications = specifications;
        }
        tracing::debug!(product_id = %id, "product updated");
    }

    /// Delete the product with the given ID. Silent no-op if absent.
    ///
    /// The favorites set is left alone; favorites are an independent ID set
    /// and may reference products that no longer exist.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() != before {
            tracing::info!(product_id = %id, "product removed");
        }
    }

    /// Toggle favorite membership for an ID: insert if absent, remove if
    /// present. Toggling twice restores the original state. No existence
    /// check against the catalog.
    pub fn toggle_favorite(&mut self, id: &ProductId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
    }

    /// Whether the ID is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// The favorited IDs, in no particular order.
    #[must_use]
    pub const fn favorites(&self) -> &HashSet<ProductId> {
        &self.favorites
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct category names across the catalog, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
