//! Checkout flow integration tests.
//!
//! Exercises the payment → confirmation state machine against real stores,
//! including the guards that keep a failed submission from mutating
//! anything.

#![allow(clippy::unwrap_used)]

use modernshop_core::PaymentMethod;
use modernshop_integration_tests::test_store;
use modernshop_storefront::{
    CardInfo, CheckoutError, CheckoutState, ShippingInfo, fixtures,
};

fn shipping() -> ShippingInfo {
    ShippingInfo {
        full_name: "John Doe".to_string(),
        phone: "555-0100".to_string(),
        address: "123 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
    }
}

// ============================================================================
// Entry guards
// ============================================================================

#[tokio::test]
async fn test_empty_cart_cannot_reach_processing() {
    let mut store = test_store();
    fixtures::seed(&mut store.catalog);

    let mut flow = store.begin_checkout();
    let err = flow
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Cash,
            None,
        )
        .await
        .unwrap_err();

    assert_eq!(err, CheckoutError::EmptyCart);
    assert_eq!(flow.state(), CheckoutState::Payment);
    assert!(store.orders.is_empty());
}

#[tokio::test]
async fn test_card_payment_requires_card_details() {
    let mut store = test_store();
    let ids = fixtures::seed(&mut store.catalog);
    let jacket = store.catalog.get(ids.get(5).unwrap()).unwrap().clone();
    store.cart.add_one(jacket).unwrap();

    let mut flow = store.begin_checkout();
    let err = flow
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Card,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::MissingCardInfo);

    let incomplete = CardInfo {
        number: "4242424242424242".to_string(),
        expiry: String::new(),
        cvv: "123".to_string(),
        name_on_card: "John Doe".to_string(),
    };
    let err = flow
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Card,
            Some(&incomplete),
        )
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::MissingField("expiry date"));

    // The flow is still usable once the form is complete.
    let complete = CardInfo {
        expiry: "12/27".to_string(),
        ..incomplete
    };
    flow.submit(
        &mut store.cart,
        &mut store.orders,
        &shipping(),
        PaymentMethod::Card,
        Some(&complete),
    )
    .await
    .unwrap();
    assert_eq!(flow.state(), CheckoutState::Confirmation);
}

// ============================================================================
// Terminal state
// ============================================================================

#[tokio::test]
async fn test_new_attempt_needs_fresh_flow() {
    let mut store = test_store();
    let ids = fixtures::seed(&mut store.catalog);
    let shirt = store.catalog.get(ids.get(2).unwrap()).unwrap().clone();

    store.cart.add_one(shirt.clone()).unwrap();
    let mut first = store.begin_checkout();
    first
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Cash,
            None,
        )
        .await
        .unwrap();

    // The spent flow refuses even with a refilled cart...
    store.cart.add_one(shirt).unwrap();
    let err = first
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Cash,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::AlreadyCompleted);

    // ...while a fresh flow goes through.
    let mut second = store.begin_checkout();
    second
        .submit(
            &mut store.cart,
            &mut store.orders,
            &shipping(),
            PaymentMethod::Cash,
            None,
        )
        .await
        .unwrap();
    assert_eq!(store.orders.len(), 2);
}

// ============================================================================
// Stock enforcement across the session
// ============================================================================

#[tokio::test]
async fn test_cart_cannot_exceed_stock_before_checkout() {
    let mut store = test_store();
    let ids = fixtures::seed(&mut store.catalog);
    // The denim jacket has 12 in stock.
    let jacket = store.catalog.get(ids.get(5).unwrap()).unwrap().clone();

    store.cart.add(jacket.clone(), 12).unwrap();
    assert!(store.cart.add_one(jacket.clone()).is_err());
    assert!(store.cart.update_quantity(&jacket.id, 13).is_err());
    assert_eq!(store.cart.line(&jacket.id).unwrap().quantity, 12);

    // The capped cart checks out fine.
    let order = store
        .checkout(&shipping(), PaymentMethod::Cash, None)
        .await
        .unwrap();
    assert_eq!(order.lines.first().unwrap().quantity, 12);
}
