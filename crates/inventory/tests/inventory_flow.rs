//! End-to-end inventory flows against the in-memory repository.

use std::sync::Arc;

use stockroom_inventory::{InMemoryProductRepository, InventoryService, ProductRepository};
use stockroom_products::Product;

fn service_with(products: Vec<Product>) -> InventoryService<Arc<InMemoryProductRepository>> {
    stockroom_observability::init();
    let repo = Arc::new(InMemoryProductRepository::with_products(products));
    InventoryService::new(repo)
}

fn laptop() -> Product {
    Product::new("LAP001", "Gaming Laptop", "Electronics", 15_000_000.0, 10, 5)
}

#[test]
fn product_lifecycle_add_move_drain_remove() {
    let service = service_with(vec![]);

    assert!(service.add_product(&laptop()));
    assert!(!service.add_product(&laptop()), "duplicate code must be rejected");

    assert!(service.stock_in("LAP001", 5));
    assert_eq!(service.find_product_by_code("LAP001").unwrap().stock(), 15);

    assert!(service.stock_out("LAP001", 10));
    let p = service.find_product_by_code("LAP001").unwrap();
    assert_eq!(p.stock(), 5);
    assert!(p.is_stock_low());

    assert!(!service.remove_product("LAP001"), "stock on hand blocks removal");
    assert!(!service.stock_out("LAP001", 6), "no partial decrement");
    assert_eq!(service.find_product_by_code("LAP001").unwrap().stock(), 5);

    assert!(service.update_stock("LAP001", 0));
    assert_eq!(service.out_of_stock_products().len(), 1);
    assert!(service.remove_product("LAP001"));
    assert!(service.find_product_by_code("LAP001").is_none());
    assert!(service.repository().is_empty());
}

#[test]
fn inactive_products_are_frozen_and_excluded_from_totals() {
    let mut retired = Product::new("OLD001", "Retired Item", "Misc", 2_000.0, 10, 1);
    retired.set_active(false);
    let service = service_with(vec![
        Product::new("A001", "Alpha Item", "Misc", 10_000.0, 2, 1),
        Product::new("B001", "Bravo Item", "Misc", 5_000.0, 3, 1),
        retired,
    ]);

    assert!(!service.stock_in("OLD001", 1));
    assert!(!service.stock_out("OLD001", 1));
    assert_eq!(service.find_product_by_code("OLD001").unwrap().stock(), 10);

    assert_eq!(service.total_stock(), 5);
    assert!((service.total_inventory_value() - 35_000.0).abs() < 0.0001);
}

#[test]
fn lookups_by_name_and_category() {
    let service = service_with(vec![
        laptop(),
        Product::new("MOU001", "Wireless Mouse", "Electronics", 200_000.0, 3, 3),
        Product::new("LMP001", "Desk Lamp", "Furniture", 75_000.0, 0, 2),
    ]);

    assert_eq!(service.find_products_by_name("mouse").len(), 1);
    assert_eq!(service.find_products_by_category("Electronics").len(), 2);

    let low: Vec<_> = service
        .low_stock_products()
        .iter()
        .filter_map(|p| p.code().map(str::to_string))
        .collect();
    assert_eq!(low, vec!["MOU001".to_string()]);
}

#[test]
fn service_can_borrow_a_shared_repository() {
    stockroom_observability::init();
    let repo = InMemoryProductRepository::new();
    {
        let service = InventoryService::new(&repo);
        assert!(service.add_product(&laptop()));
        assert!(service.stock_in("LAP001", 1));
    }
    assert_eq!(repo.find_by_code("LAP001").unwrap().stock(), 11);
}

#[test]
fn stock_in_at_capacity_is_rejected_and_totals_saturate() {
    let service = service_with(vec![
        Product::new("FULL01", "Full Bin", "Misc", 1.0, i64::MAX, 0),
        Product::new("ONE001", "Single Item", "Misc", 1.0, 1, 0),
    ]);

    assert!(!service.stock_in("FULL01", 1));
    assert_eq!(service.find_product_by_code("FULL01").unwrap().stock(), i64::MAX);
    assert_eq!(service.total_stock(), i64::MAX);
}
