use std::sync::Arc;

use storefront_catalog::{default_seed, Catalog, InMemoryCatalog};
use storefront_contact::{ContactMessageStore, InMemoryContactMessageStore};
use storefront_core::DomainResult;

/// Shared collaborators handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<dyn Catalog>,
    pub contacts: Arc<dyn ContactMessageStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn Catalog>, contacts: Arc<dyn ContactMessageStore>) -> Self {
        Self { catalog, contacts }
    }
}

/// In-memory wiring with the catalog seeded from [`default_seed`].
pub fn build_services() -> DomainResult<AppServices> {
    let catalog = InMemoryCatalog::new();
    catalog.seed_products(default_seed())?;

    Ok(AppServices::new(
        Arc::new(catalog),
        Arc::new(InMemoryContactMessageStore::new()),
    ))
}
