use std::sync::{Arc, RwLock, RwLockReadGuard};

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::query::ProductQuery;

/// Read-only product catalog consumed by the storefront.
pub trait Catalog: Send + Sync {
    /// All products, in catalog order.
    fn list_products(&self) -> Vec<Product>;

    fn get_product_by_slug(&self, slug: &str) -> Option<Product>;

    fn get_product(&self, id: &ProductId) -> Option<Product>;

    /// Products matching `query`'s category, in its sort order.
    fn query_products(&self, query: &ProductQuery) -> Vec<Product> {
        query.apply(self.list_products())
    }
}

impl<S> Catalog for Arc<S>
where
    S: Catalog + ?Sized,
{
    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        (**self).get_product_by_slug(slug)
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        (**self).get_product(id)
    }

    fn query_products(&self, query: &ProductQuery) -> Vec<Product> {
        (**self).query_products(query)
    }
}

/// In-memory catalog for tests/dev. Keeps insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with `products` (duplicates are skipped).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            if let Err(e) = catalog.insert(product) {
                tracing::warn!("skipping catalog entry: {e}");
            }
        }
        catalog
    }

    /// Add a product. Ids and slugs are unique.
    pub fn insert(&self, product: Product) -> DomainResult<()> {
        let mut products = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))?;

        if products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::conflict(format!(
                "product id already exists: {}",
                product.id
            )));
        }
        if products.iter().any(|p| p.slug == product.slug) {
            return Err(DomainError::conflict(format!(
                "product slug already exists: {}",
                product.slug
            )));
        }

        products.push(product);
        Ok(())
    }

    /// Insert `products` only when the catalog is still empty.
    ///
    /// Returns the number of products inserted (0 if the catalog was already
    /// populated).
    pub fn seed_products(&self, products: Vec<Product>) -> DomainResult<usize> {
        if !self.is_empty() {
            tracing::debug!("catalog already populated; skipping seed");
            return Ok(0);
        }

        let count = products.len();
        for product in products {
            self.insert(product)?;
        }
        tracing::info!(count, "seeded catalog");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Reads treat a poisoned lock as an empty catalog, but say so.
    fn read(&self) -> Option<RwLockReadGuard<'_, Vec<Product>>> {
        match self.inner.read() {
            Ok(guard) => Some(guard),
            Err(_) => {
                tracing::warn!("catalog lock poisoned; serving empty results");
                None
            }
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn list_products(&self) -> Vec<Product> {
        match self.read() {
            Some(products) => products.clone(),
            None => vec![],
        }
    }

    fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        let products = self.read()?;
        products.iter().find(|p| p.slug == slug).cloned()
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        let products = self.read()?;
        products.iter().find(|p| &p.id == id).cloned()
    }
}
