use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use stockroom_products::Product;

/// Product storage abstraction used by [`InventoryService`](crate::InventoryService).
///
/// Implementations own their concurrency control. Failures are reported as
/// `false` / `None` / empty lists; callers never retry.
pub trait ProductRepository: Send + Sync {
    fn find_by_code(&self, code: &str) -> Option<Product>;
    fn find_by_name(&self, name: &str) -> Vec<Product>;
    fn find_by_category(&self, category: &str) -> Vec<Product>;
    fn find_all(&self) -> Vec<Product>;
    fn save(&self, product: &Product) -> bool;
    fn delete(&self, code: &str) -> bool;
    /// Overwrite the stock level of an existing product.
    fn update_stock(&self, code: &str, new_stock: i64) -> bool;
    /// Products whose stock sits on the minimum threshold.
    fn find_low_stock(&self) -> Vec<Product>;
    /// Products with nothing on hand.
    fn find_out_of_stock(&self) -> Vec<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_by_code(code)
    }

    fn find_by_name(&self, name: &str) -> Vec<Product> {
        (**self).find_by_name(name)
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        (**self).find_by_category(category)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn save(&self, product: &Product) -> bool {
        (**self).save(product)
    }

    fn delete(&self, code: &str) -> bool {
        (**self).delete(code)
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        (**self).update_stock(code, new_stock)
    }

    fn find_low_stock(&self) -> Vec<Product> {
        (**self).find_low_stock()
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        (**self).find_out_of_stock()
    }
}

impl<S> ProductRepository for &S
where
    S: ProductRepository + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_by_code(code)
    }

    fn find_by_name(&self, name: &str) -> Vec<Product> {
        (**self).find_by_name(name)
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        (**self).find_by_category(category)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn save(&self, product: &Product) -> bool {
        (**self).save(product)
    }

    fn delete(&self, code: &str) -> bool {
        (**self).delete(code)
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        (**self).update_stock(code, new_stock)
    }

    fn find_low_stock(&self) -> Vec<Product> {
        (**self).find_low_stock()
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        (**self).find_out_of_stock()
    }
}

/// In-memory product repository for tests/dev.
///
/// Keyed by product code; listings come back ordered by code.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with `products`; later duplicates replace earlier ones.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .filter_map(|p| {
                let code = p.code()?.to_string();
                Some((code, p))
            })
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn filtered(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values().filter(|p| keep(p)).cloned().collect()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_code(&self, code: &str) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(code).cloned()
    }

    /// Case-insensitive substring match on the product name.
    fn find_by_name(&self, name: &str) -> Vec<Product> {
        let needle = name.to_lowercase();
        self.filtered(|p| p.name().is_some_and(|n| n.to_lowercase().contains(&needle)))
    }

    /// Case-insensitive exact match on the category name.
    fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.filtered(|p| p.category().is_some_and(|c| c.eq_ignore_ascii_case(category)))
    }

    fn find_all(&self) -> Vec<Product> {
        self.filtered(|_| true)
    }

    /// Rejects products without a code and codes already present.
    fn save(&self, product: &Product) -> bool {
        let Some(code) = product.code() else {
            return false;
        };
        let Ok(mut map) = self.inner.write() else {
            return false;
        };
        if map.contains_key(code) {
            return false;
        }
        map.insert(code.to_string(), product.clone());
        true
    }

    fn delete(&self, code: &str) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(code).is_some(),
            Err(_) => false,
        }
    }

    fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        let Ok(mut map) = self.inner.write() else {
            return false;
        };
        match map.get_mut(code) {
            Some(product) => {
                product.set_stock(new_stock);
                true
            }
            None => false,
        }
    }

    fn find_low_stock(&self) -> Vec<Product> {
        self.filtered(Product::is_stock_low)
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.filtered(Product::is_stock_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryProductRepository {
        InMemoryProductRepository::with_products([
            Product::new("P002", "Wireless Mouse", "Electronics", 200_000.0, 3, 3),
            Product::new("P001", "Gaming Laptop", "Electronics", 15_000_000.0, 10, 5),
            Product::new("P003", "Desk Lamp", "Furniture", 75_000.0, 0, 2),
        ])
    }

    fn codes(products: &[Product]) -> Vec<&str> {
        products.iter().filter_map(Product::code).collect()
    }

    #[test]
    fn find_all_is_ordered_by_code() {
        let repo = seeded();
        assert_eq!(codes(&repo.find_all()), vec!["P001", "P002", "P003"]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn seeding_skips_unkeyed_products_and_keeps_last_duplicate() {
        let repo = InMemoryProductRepository::with_products([
            Product::new("P001", "First Laptop", "Electronics", 1.0, 1, 0),
            Product::default(),
            Product::new("P001", "Second Laptop", "Electronics", 1.0, 2, 0),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_code("P001").unwrap().name(), Some("Second Laptop"));
    }

    #[test]
    fn save_rejects_duplicates_and_unkeyed_products() {
        let repo = seeded();
        let dup = Product::new("P001", "Another", "Electronics", 1.0, 1, 0);
        assert!(!repo.save(&dup));
        assert!(!repo.save(&Product::default()));

        let fresh = Product::new("P004", "Cable", "Electronics", 50_000.0, 0, 0);
        assert!(repo.save(&fresh));
        assert_eq!(repo.find_by_code("P004").unwrap().name(), Some("Cable"));
    }

    #[test]
    fn delete_and_update_require_existing_code() {
        let repo = seeded();
        assert!(!repo.delete("NOPE"));
        assert!(!repo.update_stock("NOPE", 3));

        assert!(repo.update_stock("P001", 42));
        assert_eq!(repo.find_by_code("P001").unwrap().stock(), 42);

        assert!(repo.delete("P001"));
        assert!(repo.find_by_code("P001").is_none());
    }

    #[test]
    fn name_and_category_lookups() {
        let repo = seeded();
        assert_eq!(codes(&repo.find_by_name("laptop")), vec!["P001"]);
        assert_eq!(codes(&repo.find_by_category("electronics")), vec!["P001", "P002"]);
        assert!(repo.find_by_category("Electro").is_empty());
    }

    #[test]
    fn stock_level_queries() {
        let repo = seeded();
        assert_eq!(codes(&repo.find_low_stock()), vec!["P002"]);
        assert_eq!(codes(&repo.find_out_of_stock()), vec!["P003"]);
    }

    #[test]
    fn arc_and_reference_delegate() {
        let repo = Arc::new(seeded());
        let by_ref: &InMemoryProductRepository = &repo;
        assert!(ProductRepository::update_stock(&by_ref, "P003", 1));
        assert_eq!(ProductRepository::find_by_code(&repo, "P003").unwrap().stock(), 1);
    }
}
