//! Database-backed tests for category management, advertisements, and
//! admin catalog oversight.
//!
//! Run with `MARKET_TEST_DATABASE_URL` set and `-- --ignored`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use rust_decimal::Decimal;
use uuid::Uuid;

use remedia_core::{AdvertisementId, CategoryId, MedicineId};

use remedia_api::db::{
    AdvertisementRepository, CategoryRepository, MedicineRepository, RepositoryError,
};
use remedia_api::models::{NewAdvertisement, NewCategory, NewMedicine, UpdateCategory};
use remedia_integration_tests::{TestContext, price};

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_category_lifecycle() {
    let ctx = TestContext::new().await;
    let repo = CategoryRepository::new(&ctx.pool);

    let created = repo
        .create(&NewCategory {
            name: "Antibiotic".to_owned(),
            image_url: None,
        })
        .await
        .expect("category insert failed");
    assert_eq!(created.name, "Antibiotic");

    let listed = repo.list().await.expect("category listing failed");
    assert!(listed.iter().any(|category| category.id == created.id));

    // Partial update keeps the untouched field.
    let updated = repo
        .update(
            created.id,
            &UpdateCategory {
                name: None,
                image_url: Some("https://cdn.example/antibiotic.png".to_owned()),
            },
        )
        .await
        .expect("category update failed");
    assert_eq!(updated.name, "Antibiotic");
    assert_eq!(
        updated.image_url.as_deref(),
        Some("https://cdn.example/antibiotic.png")
    );

    repo.delete(created.id).await.expect("category delete failed");
    assert!(repo.get(created.id).await.expect("lookup failed").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_category_update_unknown_id_is_not_found() {
    let ctx = TestContext::new().await;

    let err = CategoryRepository::new(&ctx.pool)
        .update(
            CategoryId::new(Uuid::new_v4()),
            &UpdateCategory {
                name: Some("Ghost".to_owned()),
                image_url: None,
            },
        )
        .await
        .expect_err("unknown category id should not match any row");

    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_advertisement_submit_and_slide_toggle() {
    let ctx = TestContext::new().await;
    let seller = TestContext::unique_email("seller");
    let repo = AdvertisementRepository::new(&ctx.pool);

    let created = repo
        .create(
            &seller,
            &NewAdvertisement {
                title: "Napa Extra 500mg".to_owned(),
                description: "Fast pain relief".to_owned(),
                image_url: None,
            },
        )
        .await
        .expect("advertisement insert failed");

    // New submissions never start in the slider.
    assert!(!created.in_slide);
    assert_eq!(created.seller_email, seller);

    repo.set_in_slide(created.id, true)
        .await
        .expect("slide toggle failed");

    let listed = repo.list().await.expect("advertisement listing failed");
    let toggled = listed
        .iter()
        .find(|ad| ad.id == created.id)
        .expect("submitted advertisement should be listed");
    assert!(toggled.in_slide);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_slide_toggle_unknown_id_is_not_found() {
    let ctx = TestContext::new().await;

    let err = AdvertisementRepository::new(&ctx.pool)
        .set_in_slide(AdvertisementId::new(Uuid::new_v4()), true)
        .await
        .expect_err("unknown advertisement id should not match any row");

    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_delete_ignores_listing_ownership() {
    let ctx = TestContext::new().await;
    let seller = TestContext::unique_email("seller");
    let repo = MedicineRepository::new(&ctx.pool);

    let listing = repo
        .create(
            &seller,
            &NewMedicine {
                title: "Seclo 20mg".to_owned(),
                category: "Antiulcerant".to_owned(),
                price: price(1200),
                discount: Decimal::ZERO,
            },
        )
        .await
        .expect("listing insert failed");

    // The seller-scoped path refuses a different owner...
    let other = TestContext::unique_email("other-seller");
    let err = repo
        .delete(listing.id, &other)
        .await
        .expect_err("foreign owner must not delete the listing");
    assert!(matches!(err, RepositoryError::NotFound));

    // ...while the oversight path removes it regardless.
    repo.delete_any(listing.id)
        .await
        .expect("admin delete failed");
    assert!(repo.get(listing.id).await.expect("lookup failed").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_admin_delete_unknown_listing_is_not_found() {
    let ctx = TestContext::new().await;

    let err = MedicineRepository::new(&ctx.pool)
        .delete_any(MedicineId::new(Uuid::new_v4()))
        .await
        .expect_err("unknown listing id should not match any row");

    assert!(matches!(err, RepositoryError::NotFound));
}
