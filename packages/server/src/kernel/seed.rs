use serde_json::json;
use tracing::info;

use super::store::{collections, to_document, DocumentStore, Filter, StoreError};

const SLOTS: &[&str] = &[
    "08.00 AM - 08.30 AM",
    "08.30 AM - 09.00 AM",
    "09.00 AM - 09.30 AM",
    "09.30 AM - 10.00 AM",
    "10.00 AM - 10.30 AM",
    "10.30 AM - 11.00 AM",
    "11.00 AM - 11.30 AM",
    "11.30 AM - 12.00 PM",
    "01.00 PM - 01.30 PM",
    "01.30 PM - 02.00 PM",
    "02.00 PM - 02.30 PM",
    "02.30 PM - 03.00 PM",
];

fn demo_treatments() -> Vec<(&'static str, u32)> {
    vec![
        ("Teeth Orthodontics", 80),
        ("Cosmetic Dentistry", 120),
        ("Teeth Cleaning", 25),
        ("Cavity Protection", 40),
        ("Pediatric Dental", 60),
        ("Oral Surgery", 300),
    ]
}

/// Seeds the treatment catalog when the services collection is empty.
///
/// Idempotent so restarts against a persistent store never duplicate the
/// catalog. Returns how many treatments were inserted.
pub async fn seed_demo_catalog(store: &dyn DocumentStore) -> Result<usize, StoreError> {
    let existing = store
        .find_many(collections::SERVICES, &Filter::new())
        .await?;
    if !existing.is_empty() {
        info!(count = existing.len(), "treatment catalog already present, skipping seed");
        return Ok(0);
    }

    let treatments = demo_treatments();
    let inserted = treatments.len();
    for (name, price) in treatments {
        let document = to_document(&json!({
            "name": name,
            "slots": SLOTS,
            "price": price,
        }))?;
        store.insert_one(collections::SERVICES, document).await?;
    }

    info!(count = inserted, "seeded demo treatment catalog");
    Ok(inserted)
}
