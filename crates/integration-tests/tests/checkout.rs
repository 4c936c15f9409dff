//! Database-backed tests for the checkout transaction.
//!
//! These exercise the atomicity contract directly against `PostgreSQL`:
//! a committed checkout records the payment and clears the cart together,
//! a failed checkout leaves both sides untouched, and checkout is
//! deliberately not idempotent.
//!
//! Run with `MARKET_TEST_DATABASE_URL` set and `-- --ignored`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use uuid::Uuid;

use remedia_core::{PaymentId, PaymentStatus};

use remedia_api::db::{PaymentRepository, RepositoryError};
use remedia_api::models::CheckoutPayment;
use remedia_integration_tests::{TestContext, price};

fn payload(
    ctx_email: &remedia_core::Email,
    seller: &remedia_core::Email,
    cents: i64,
    cart_ids: Vec<remedia_core::CartItemId>,
) -> CheckoutPayment {
    CheckoutPayment {
        id: None,
        email: ctx_email.clone(),
        seller_email: seller.clone(),
        price: price(cents),
        status: PaymentStatus::Pending,
        cart_ids,
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_checkout_commits_payment_and_clears_cart() {
    let ctx = TestContext::new().await;
    let buyer = TestContext::unique_email("buyer");
    let seller = TestContext::unique_email("seller");
    ctx.ensure_user(&buyer).await;

    let c1 = ctx.seed_cart_item(&buyer, "Napa Extra 500mg", 550).await;
    let c2 = ctx.seed_cart_item(&buyer, "Seclo 20mg", 950).await;

    let outcome = PaymentRepository::new(&ctx.pool)
        .checkout(&payload(&buyer, &seller, 1500, vec![c1, c2]))
        .await
        .expect("checkout should commit");

    assert_eq!(outcome.payment_result.status, PaymentStatus::Pending);
    assert_eq!(outcome.payment_result.price, price(1500));
    assert_eq!(outcome.payment_result.cart_ids, vec![c1, c2]);
    assert_eq!(outcome.delete_result.deleted_count, 2);

    assert_eq!(ctx.cart_count(&buyer).await, 0);
    assert_eq!(ctx.payment_count(&buyer).await, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_failed_checkout_leaves_cart_intact() {
    let ctx = TestContext::new().await;
    let buyer = TestContext::unique_email("buyer");
    let seller = TestContext::unique_email("seller");
    ctx.ensure_user(&buyer).await;

    let explicit_id = PaymentId::new(Uuid::new_v4());

    let first = ctx.seed_cart_item(&buyer, "Monas 10mg", 1850).await;
    let mut first_payload = payload(&buyer, &seller, 1850, vec![first]);
    first_payload.id = Some(explicit_id);

    let repo = PaymentRepository::new(&ctx.pool);
    repo.checkout(&first_payload)
        .await
        .expect("first checkout should commit");
    assert_eq!(ctx.cart_count(&buyer).await, 0);

    // Reusing the payment id makes the insert fail, which must roll back
    // the cart deletion too.
    let second = ctx.seed_cart_item(&buyer, "Cetirizine 10mg", 300).await;
    let mut second_payload = payload(&buyer, &seller, 300, vec![second]);
    second_payload.id = Some(explicit_id);

    let err = repo
        .checkout(&second_payload)
        .await
        .expect_err("duplicate payment id should abort the transaction");
    assert!(matches!(err, RepositoryError::Database(_)));

    assert_eq!(ctx.cart_count(&buyer).await, 1, "cart must survive the rollback");
    // The surviving payment is the committed one; the aborted attempt left
    // no row behind.
    assert!(ctx.payment_exists(explicit_id).await);
    assert_eq!(ctx.payment_count(&buyer).await, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_checkout_records_two_payments() {
    let ctx = TestContext::new().await;
    let buyer = TestContext::unique_email("buyer");
    let seller = TestContext::unique_email("seller");
    ctx.ensure_user(&buyer).await;

    let item = ctx.seed_cart_item(&buyer, "Azithromycin 500mg", 3500).await;
    let submission = payload(&buyer, &seller, 3500, vec![item]);

    let repo = PaymentRepository::new(&ctx.pool);

    let first = repo
        .checkout(&submission)
        .await
        .expect("first submission should commit");
    assert_eq!(first.delete_result.deleted_count, 1);

    // Same payload again: the deletions no-op but a second payment lands.
    let second = repo
        .checkout(&submission)
        .await
        .expect("second submission should also commit");
    assert_eq!(second.delete_result.deleted_count, 0);
    assert_ne!(first.payment_result.id, second.payment_result.id);

    assert_eq!(ctx.payment_count(&buyer).await, 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_mark_paid_transitions_status() {
    let ctx = TestContext::new().await;
    let buyer = TestContext::unique_email("buyer");
    let seller = TestContext::unique_email("seller");
    ctx.ensure_user(&buyer).await;

    let item = ctx.seed_cart_item(&buyer, "Napa Extra 500mg", 550).await;
    let repo = PaymentRepository::new(&ctx.pool);

    let outcome = repo
        .checkout(&payload(&buyer, &seller, 550, vec![item]))
        .await
        .expect("checkout should commit");

    repo.mark_paid(outcome.payment_result.id)
        .await
        .expect("mark_paid should succeed");

    let (status,): (PaymentStatus,) =
        sqlx::query_as("SELECT status FROM market.payment WHERE id = $1")
            .bind(outcome.payment_result.id)
            .fetch_one(&ctx.pool)
            .await
            .expect("payment row should exist");
    assert_eq!(status, PaymentStatus::Paid);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_mark_paid_unknown_payment_is_not_found() {
    let ctx = TestContext::new().await;

    let err = PaymentRepository::new(&ctx.pool)
        .mark_paid(PaymentId::new(Uuid::new_v4()))
        .await
        .expect_err("unknown payment id should not match any row");

    assert!(matches!(err, RepositoryError::NotFound));
}
