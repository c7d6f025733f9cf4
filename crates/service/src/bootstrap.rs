//! Startup seeding
//!
//! Runs once before the listener binds. Each collection is filled with a
//! fixed record set only when it is empty, so restarts never duplicate data.

use tracing::info;

use models::{Category, Document, Vendor};

use crate::catalog::Catalog;
use crate::errors::ServiceError;
use crate::repository::Repository;

pub fn seed_categories() -> Vec<Category> {
    ["Fruit", "Nuts", "Breads", "Meats", "Eggs", "Dried"]
        .into_iter()
        .map(Category::new)
        .collect()
}

pub fn seed_vendors() -> Vec<Vendor> {
    [
        ("Gordon", "Sumner"),
        ("Peter", "Tosh"),
        ("Phil", "Collins"),
        ("Charly", "Garcia"),
        ("Bob", "Marley"),
        ("Gustavo", "Cerati"),
        ("Nile", "Rodgers"),
    ]
    .into_iter()
    .map(|(first, last)| Vendor::new(first, last))
    .collect()
}

/// Save `records` when the collection is empty; returns the final document count.
pub async fn seed_if_empty<E: Document>(repo: &dyn Repository<E>, records: Vec<E>) -> Result<u64, ServiceError> {
    if repo.count().await? == 0 {
        repo.save_all(records).await?;
        info!(collection = E::COLLECTION, event = "seeded", "empty collection seeded");
    }
    let count = repo.count().await?;
    info!(collection = E::COLLECTION, count, "document count");
    Ok(count)
}

pub async fn load_seed_data(catalog: &Catalog) -> Result<(), ServiceError> {
    seed_if_empty(catalog.categories.repository().as_ref(), seed_categories()).await?;
    seed_if_empty(catalog.vendors.repository().as_ref(), seed_vendors()).await?;
    Ok(())
}
