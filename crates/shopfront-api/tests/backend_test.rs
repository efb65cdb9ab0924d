//! Backend endpoint behavior, including the full checkout path against
//! the store.

use shopfront_api::{ApiError, MockBackend};
use shopfront_commerce::prelude::*;
use shopfront_store::{CartAction, MemoryStore, Store};
use std::time::Duration;

fn backend() -> MockBackend {
    MockBackend::new().with_latency(Duration::ZERO)
}

#[tokio::test]
async fn login_and_refresh_roundtrip() {
    let mut backend = backend();
    backend
        .register("shopper@example.com", "Sunflower9")
        .await
        .unwrap();

    let tokens = backend
        .login("Shopper@Example.com", "Sunflower9")
        .await
        .unwrap();
    let rotated = backend.refresh(&tokens).await.unwrap();

    assert_ne!(tokens.access.token, rotated.access.token);
    assert_eq!(tokens.refresh.token, rotated.refresh.token);
}

#[tokio::test]
async fn login_with_bad_credentials_fails() {
    let mut backend = backend();
    backend
        .register("shopper@example.com", "Sunflower9")
        .await
        .unwrap();

    assert!(backend
        .login("shopper@example.com", "wrong-password")
        .await
        .is_err());
    assert!(backend
        .login("nobody@example.com", "Sunflower9")
        .await
        .is_err());
}

#[tokio::test]
async fn listing_filters_and_paginates() {
    let backend = backend();

    let all = backend.list_products(&ProductQuery::new()).await;
    assert_eq!(all.pagination.total, 5);

    let lamps = backend
        .list_products(&ProductQuery::new().with_search("lamp"))
        .await;
    assert_eq!(lamps.items.len(), 1);
    assert_eq!(lamps.items[0].name, "Desk Lamp");

    let rated = backend
        .list_products(&ProductQuery::new().with_min_rating(4.0))
        .await;
    assert_eq!(rated.items.len(), 1);
    assert_eq!(rated.items[0].name, "Ceramic Mug");

    let page = backend
        .list_products(&ProductQuery::new().with_pagination(2, 2))
        .await;
    assert_eq!(page.items.len(), 2);
    assert!(page.pagination.has_prev);
    assert!(page.pagination.has_next);
}

#[tokio::test]
async fn reviews_create_and_list() {
    let mut backend = backend();
    let product_id = ProductId::new(2);

    backend
        .create_review(product_id, "Ana", 5, "Lovely", "Looks great framed.")
        .await
        .unwrap();
    backend
        .create_review(product_id, "Ben", 3, "Fine", "Arrived a bit bent.")
        .await
        .unwrap();

    let reviews = backend.reviews(product_id).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.product_id == product_id));

    assert!(matches!(
        backend.reviews(ProductId::new(999)).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn stock_failure_is_retryable() {
    let backend = backend();
    // Office Chair is seeded with 3 in stock.
    let chair = backend.product(ProductId::new(4)).await.unwrap();
    let cart = CartState::new().add_item(chair, 5).unwrap();

    let err = backend.validate_cart(&cart).await.unwrap_err();
    assert!(err.is_retryable());

    // The failed submission changes nothing; the same call is repeatable.
    let err_again = backend.validate_cart(&cart).await.unwrap_err();
    assert!(matches!(
        err_again,
        ApiError::Commerce(CommerceError::InsufficientStock { .. })
    ));
}

#[tokio::test]
async fn checkout_end_to_end() {
    let backend = backend();
    let mut store = Store::open(MemoryStore::new());
    let mut flow = CheckoutFlow::new();

    let mug = backend.product(ProductId::new(1)).await.unwrap();
    let poster = backend.product(ProductId::new(2)).await.unwrap();
    store
        .dispatch(CartAction::AddItem {
            product: mug,
            quantity: 2,
        })
        .unwrap();
    store
        .dispatch(CartAction::AddItem {
            product: poster,
            quantity: 1,
        })
        .unwrap();
    store
        .dispatch(CartAction::ApplyPromo("welcome10".to_string()))
        .unwrap();

    // Walk the wizard: address gate first, then confirm.
    assert_eq!(flow.go_to(CheckoutStep::Confirm, store.cart()), CheckoutStep::Address);
    flow.set_address(ShippingAddress::new("Ana", "12 Elm St", "Lisbon"));
    assert_eq!(flow.go_to(CheckoutStep::Confirm, store.cart()), CheckoutStep::Confirm);

    let address = flow.shipping_address().unwrap().clone();
    let order = backend.place_order(store.cart(), address).await.unwrap();

    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.subtotal.amount_cents, 890);
    assert_eq!(order.discount.amount_cents, 1000);
    assert!(order.total.is_zero());

    store.complete_checkout(order).unwrap();
    flow.reset();

    assert!(store.cart().is_empty());
    assert_eq!(store.orders().len(), 1);
    assert!(flow.shipping_address().is_none());
}
