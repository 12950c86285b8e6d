//! Scripted end-to-end shopping session.
//!
//! Seeds the sample catalog, browses and filters it, fills the cart,
//! checks out with a card, and prints the confirmation and dashboard
//! numbers. With `--fast` the simulated payment delay is skipped.

use std::time::Duration;

use modernshop_core::PaymentMethod;
use modernshop_storefront::{
    CardInfo, CheckoutConfig, ShippingInfo, StoreConfig, StoreState, filter_products, fixtures,
    pricing,
};

/// Run the demo session.
#[allow(clippy::print_stdout)]
pub async fn run(fast: bool, payment: &str) -> Result<(), Box<dyn std::error::Error>> {
    let payment: PaymentMethod = payment.parse()?;
    let delay = if fast {
        Duration::ZERO
    } else {
        Duration::from_secs(2)
    };
    let config =
        StoreConfig::default().with_checkout(CheckoutConfig::default().with_processing_delay(delay));

    let mut store = StoreState::new(config);
    let ids = fixtures::seed(&mut store.catalog);
    println!("Seeded {} products.\n", store.catalog.len());

    // Browse: everything wireless in Electronics.
    println!("Searching for \"wireless\" in Electronics:");
    for product in filter_products(store.catalog.products(), "wireless", Some("Electronics")) {
        println!("  {} - {}", product.name, product.price);
    }

    // Fill the cart: headphones twice (merges into one line), one charging pad.
    let headphones = ids.first().ok_or("catalog is empty")?;
    let pad = ids.get(4).ok_or("missing sample product")?;
    let headphones = store.catalog.get(headphones).ok_or("unknown product")?.clone();
    let pad = store.catalog.get(pad).ok_or("unknown product")?.clone();
    store.cart.add_one(headphones.clone())?;
    store.cart.add_one(pad)?;
    // Second add of the same product merges into the existing line.
    store.cart.add_one(headphones)?;

    let breakdown = pricing::price(store.cart.subtotal(), store.config().checkout.tax_rate);
    println!("\nCart: {} items in {} lines", store.cart.item_count(), store.cart.len());
    println!("  Subtotal {}", breakdown.subtotal);
    println!("  Tax      {}", breakdown.tax);
    println!("  Total    {}", breakdown.total);

    // Check out.
    let shipping = ShippingInfo {
        full_name: "John Doe".to_string(),
        phone: "555-0100".to_string(),
        address: "123 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
    };
    // Card details are only needed (and only validated) for card payment.
    let card = (payment == PaymentMethod::Card).then(|| CardInfo {
        number: "4242424242424242".to_string(),
        expiry: "12/27".to_string(),
        cvv: "123".to_string(),
        name_on_card: "John Doe".to_string(),
    });

    println!("\nProcessing...");
    let order = store.checkout(&shipping, payment, card.as_ref()).await?;

    println!("Order confirmed!");
    println!("  Order ID:        {}", order.id);
    println!("  Total:           {}", order.total);
    println!("  Payment method:  {}", order.payment_method.label());
    println!("  Delivery:        {}", order.shipping_address);

    let stats = store.stats();
    println!("\nDashboard:");
    println!("  Products:   {}", stats.total_products);
    println!("  Orders:     {}", stats.total_orders);
    println!("  Revenue:    {}", stats.total_revenue);
    println!("  Low stock:  {}", stats.low_stock_products);

    Ok(())
}
