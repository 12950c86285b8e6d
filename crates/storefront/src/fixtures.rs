//! Sample catalog.
//!
//! The six demo products used by the CLI and the integration tests. Prices
//! and stock levels are part of the store's reference data; tests depend on
//! them.

use modernshop_core::{Money, ProductId};

use crate::catalog::{CatalogStore, NewProduct};

/// The sample products, in display order.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "Premium noise-cancelling wireless headphones with 30-hour battery life"
                .to_string(),
            price: Money::from_cents(19_999),
            category: "Electronics".to_string(),
            image_url: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg"
                .to_string(),
            stock: 25,
            specifications: vec![
                "Bluetooth 5.0".to_string(),
                "30-hour battery".to_string(),
                "Active noise cancellation".to_string(),
                "Quick charge".to_string(),
            ],
        },
        NewProduct {
            name: "Smart Fitness Watch".to_string(),
            description: "Advanced fitness tracking with heart rate monitor and GPS".to_string(),
            price: Money::from_cents(29_999),
            category: "Electronics".to_string(),
            image_url: "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg"
                .to_string(),
            stock: 15,
            specifications: vec![
                "GPS tracking".to_string(),
                "Heart rate monitor".to_string(),
                "7-day battery".to_string(),
                "Water resistant".to_string(),
            ],
        },
        NewProduct {
            name: "Premium Cotton T-Shirt".to_string(),
            description: "Soft, comfortable cotton t-shirt in various colors".to_string(),
            price: Money::from_cents(2_999),
            category: "Clothing".to_string(),
            image_url: "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg"
                .to_string(),
            stock: 50,
            specifications: vec![
                "100% cotton".to_string(),
                "Pre-shrunk".to_string(),
                "Machine washable".to_string(),
                "Available in 6 colors".to_string(),
            ],
        },
        NewProduct {
            name: "Leather Crossbody Bag".to_string(),
            description: "Stylish genuine leather crossbody bag for everyday use".to_string(),
            price: Money::from_cents(8_999),
            category: "Accessories".to_string(),
            image_url: "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg"
                .to_string(),
            stock: 20,
            specifications: vec![
                "Genuine leather".to_string(),
                "Adjustable strap".to_string(),
                "Multiple compartments".to_string(),
                "Compact design".to_string(),
            ],
        },
        NewProduct {
            name: "Wireless Charging Pad".to_string(),
            description: "Fast wireless charging pad compatible with all Qi-enabled devices"
                .to_string(),
            price: Money::from_cents(3_999),
            category: "Electronics".to_string(),
            image_url: "https://images.pexels.com/photos/4526427/pexels-photo-4526427.jpeg"
                .to_string(),
            stock: 30,
            specifications: vec![
                "Qi wireless charging".to_string(),
                "15W fast charge".to_string(),
                "LED indicator".to_string(),
                "Non-slip base".to_string(),
            ],
        },
        NewProduct {
            name: "Classic Denim Jacket".to_string(),
            description: "Vintage-style denim jacket perfect for layering".to_string(),
            price: Money::from_cents(7_999),
            category: "Clothing".to_string(),
            image_url: "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg"
                .to_string(),
            stock: 12,
            specifications: vec![
                "100% cotton denim".to_string(),
                "Classic fit".to_string(),
                "Button closure".to_string(),
                "Chest pockets".to_string(),
            ],
        },
    ]
}

/// Seed a catalog with the sample products. Returns the assigned IDs in the
/// same order as [`sample_products`].
pub fn seed(catalog: &mut CatalogStore) -> Vec<ProductId> {
    sample_products()
        .into_iter()
        .map(|p| catalog.add(p).id)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_catalog() {
        let mut catalog = CatalogStore::new();
        let ids = seed(&mut catalog);

        assert_eq!(catalog.len(), 6);
        assert_eq!(ids.len(), 6);
        assert_eq!(
            catalog.categories(),
            vec!["Accessories", "Clothing", "Electronics"]
        );

        let headphones = catalog.get(ids.first().unwrap()).unwrap();
        assert_eq!(headphones.name, "Wireless Bluetooth Headphones");
        assert_eq!(headphones.price, Money::from_cents(19_999));
        assert_eq!(headphones.stock, 25);
        assert_eq!(headphones.specifications.len(), 4);
    }
}
