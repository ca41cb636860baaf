//! Listing filters for the product grid.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sort order for product listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Most recently added first (highest id).
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Optional category filter plus an optional sort order.
///
/// Without a sort the catalog's own order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub sort: Option<ProductSort>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sorted_by(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Category to match exactly; blank counts as no filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Keep the products in `category` and order them by `sort`.
    ///
    /// Sorting is stable, so ties keep catalog order.
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        if let Some(category) = self.category() {
            products.retain(|p| p.category == category);
        }

        match self.sort {
            Some(ProductSort::Newest) => products.sort_by(newer_first),
            Some(ProductSort::PriceAsc) => products.sort_by_key(|p| p.price),
            Some(ProductSort::PriceDesc) => products.sort_by(|a, b| b.price.cmp(&a.price)),
            None => {}
        }
        products
    }
}

// Catalog ids are numeric strings in practice; compare them as numbers when
// both parse, otherwise lexically.
fn newer_first(a: &Product, b: &Product) -> Ordering {
    match (a.id.as_str().parse::<u64>(), b.id.as_str().parse::<u64>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        _ => b.id.cmp(&a.id),
    }
}
