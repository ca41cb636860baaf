//! Seed catalog used by the dev server when no products exist yet.

use storefront_core::ProductId;

use crate::product::Product;

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: u64,
    original_price: Option<u64>,
    category: &'static str,
    image: &'static str,
    stock_count: u32,
    features: [&'static str; 3],
}

const SEED: [SeedEntry; 4] = [
    SeedEntry {
        id: "1",
        name: "Premium Cotton Kurta",
        description: "High-quality cotton kurta perfect for summer.",
        price: 2500,
        original_price: Some(3000),
        category: "Fashion",
        image: "https://placehold.co/600x800?text=Kurta",
        stock_count: 25,
        features: ["100% Cotton", "Traditional Fit", "Machine Washable"],
    },
    SeedEntry {
        id: "2",
        name: "Peshawari Chappal",
        description: "Handcrafted leather chappal in classic black.",
        price: 3500,
        original_price: Some(4000),
        category: "Footwear",
        image: "https://placehold.co/600x800?text=Chappal",
        stock_count: 12,
        features: ["Genuine Leather", "Hand Stitched", "Comfortable Sole"],
    },
    SeedEntry {
        id: "3",
        name: "Wireless Earbuds",
        description: "Crystal clear sound with long battery life.",
        price: 4500,
        original_price: Some(6000),
        category: "Electronics",
        image: "https://placehold.co/600x800?text=Earbuds",
        stock_count: 8,
        features: ["Active Noise Cancellation", "24h Battery", "Bluetooth 5.3"],
    },
    SeedEntry {
        id: "4",
        name: "Smart Watch",
        description: "Fitness tracker with heart rate monitor.",
        price: 5500,
        original_price: None,
        category: "Electronics",
        image: "https://placehold.co/600x800?text=Watch",
        stock_count: 5,
        features: ["Heart Rate Monitor", "Step Counter", "Sleep Tracking"],
    },
];

/// The four launch products.
pub fn default_seed() -> Vec<Product> {
    SEED.iter()
        .filter_map(|entry| {
            let id = ProductId::new(entry.id).ok()?;
            let mut product = Product::new(id, entry.name, entry.price, entry.stock_count);
            product.description = entry.description.to_string();
            product.original_price = entry.original_price;
            product.category = entry.category.to_string();
            product.images = vec![entry.image.to_string()];
            product.features = entry.features.iter().map(|f| f.to_string()).collect();
            product.rating = 5;
            Some(product)
        })
        .collect()
}
