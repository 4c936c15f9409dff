//! Seed the catalog with sample listings.
//!
//! Inserts a handful of medicines owned by the given seller so a fresh
//! database has something to browse. The seller account must already exist
//! and hold the seller role for the listings to be manageable through the
//! API.

use rust_decimal::Decimal;

use remedia_core::{Email, Price};

use remedia_api::db::MedicineRepository;
use remedia_api::models::NewMedicine;

use super::{CommandError, connect};

/// (title, category, price in cents, discount percent)
const SAMPLES: &[(&str, &str, i64, i64)] = &[
    ("Napa Extra 500mg", "Analgesic", 550, 0),
    ("Seclo 20mg", "Antiulcerant", 1200, 10),
    ("Monas 10mg", "Respiratory", 1850, 0),
    ("Azithromycin 500mg", "Antibiotic", 3500, 5),
    ("Cetirizine 10mg", "Antihistamine", 300, 0),
];

/// Insert the sample listings for a seller.
pub async fn catalog(seller: &str) -> Result<(), CommandError> {
    let seller =
        Email::parse(seller).map_err(|_| CommandError::InvalidEmail(seller.to_owned()))?;

    let pool = connect().await?;
    let repo = MedicineRepository::new(&pool);

    for &(title, category, cents, discount) in SAMPLES {
        let medicine = NewMedicine {
            title: title.to_owned(),
            category: category.to_owned(),
            price: Price::new(Decimal::new(cents, 2))?,
            discount: Decimal::from(discount),
        };

        let created = repo.create(&seller, &medicine).await?;
        tracing::info!("Seeded listing: {} ({})", created.title, created.id);
    }

    tracing::info!("Catalog seeding complete!");
    Ok(())
}
