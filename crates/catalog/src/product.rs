use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Catalog product (read model).
///
/// The cart keeps a copy of this record per line item, so it must stay
/// serialisable as-is. Field names go over the wire in camelCase
/// (`stockCount`, `originalPrice`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    /// Price in smallest currency unit.
    pub price: u64,
    /// Pre-discount price, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub in_stock: bool,
    pub stock_count: u32,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Minimal product: slug derived from the name, `in_stock` derived from
    /// `stock_count`, everything else empty.
    pub fn new(id: ProductId, name: impl Into<String>, price: u64, stock_count: u32) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            description: String::new(),
            long_description: String::new(),
            price,
            original_price: None,
            images: Vec::new(),
            category: String::new(),
            sub_category: String::new(),
            in_stock: stock_count > 0,
            stock_count,
            rating: 0,
            review_count: 0,
            features: Vec::new(),
        }
    }

    /// Whether the product can currently be put into a cart.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock_count > 0
    }

    /// Primary image, if any.
    pub fn image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whole-percent discount relative to `original_price` (0 when not on sale).
    pub fn discount_percent(&self) -> u8 {
        match self.original_price {
            Some(original) if original > self.price && original > 0 => {
                let saved = original - self.price;
                // saved < original, so the ratio is below 100.
                (u128::from(saved) * 100 / u128::from(original)) as u8
            }
            _ => 0,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// URL slug for a product name: lowercase ASCII alphanumerics separated by
/// single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
