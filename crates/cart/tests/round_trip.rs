use std::sync::Arc;

use proptest::prelude::*;

use storefront_cart::{Cart, CartPersistence, CartStore, InMemoryKeyValueStore, ShippingPolicy};
use storefront_catalog::Product;
use storefront_core::ProductId;

fn products() -> Vec<Product> {
    (0..6)
        .map(|i| {
            let mut p = Product::new(
                ProductId::new(format!("p{i}")).unwrap(),
                format!("Product {i}"),
                100 * (i as u64 + 1),
                i as u32 * 2,
            );
            p.images = vec![format!("https://img.example/{i}.png")];
            p.features = vec!["feature".to_string(); i];
            p
        })
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Set(usize, i64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (0usize..6).prop_map(Op::Add),
        1 => (0usize..6).prop_map(Op::Remove),
        2 => ((0usize..6), -3i64..15).prop_map(|(i, q)| Op::Set(i, q)),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// Property: load(save(state)) == state for every reachable cart.
    #[test]
    fn save_load_round_trip(ops in prop::collection::vec(op(), 0..48)) {
        let catalog = products();
        let slot = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CartStore::open(slot.clone(), ShippingPolicy::default());

        for op in &ops {
            match op {
                Op::Add(i) => { store.add(&catalog[*i]).unwrap(); }
                Op::Remove(i) => { store.remove(&catalog[*i].id).unwrap(); }
                Op::Set(i, q) => { store.set_quantity(&catalog[*i].id, *q).unwrap(); }
                Op::Clear => { store.clear().unwrap(); }
            }
        }

        let reloaded: Cart = CartPersistence::new(slot).load(ShippingPolicy::default());
        prop_assert_eq!(&reloaded, store.cart());
        prop_assert_eq!(reloaded.grand_total(), store.grand_total());
    }
}

#[test]
fn scenario_add_four_times_with_stock_three() {
    let slot = Arc::new(InMemoryKeyValueStore::new());
    let mut store = CartStore::open(slot.clone(), ShippingPolicy::default());
    let a = Product::new(ProductId::new("A").unwrap(), "Kurta", 2500, 3);

    for _ in 0..4 {
        store.add(&a).unwrap();
    }

    assert_eq!(store.cart().quantity_of(&a.id), 3);
    assert_eq!(store.total_item_count(), 3);
    assert_eq!(store.subtotal(), 7500);
    assert_eq!(store.shipping_cost(), 0);

    let reloaded = CartStore::open(slot, ShippingPolicy::default());
    assert_eq!(reloaded.cart().quantity_of(&a.id), 3);
}
