use tracing::{debug, info};

use stockroom_products::Product;
use stockroom_products::validation::{
    is_valid_product, is_valid_product_code, is_valid_quantity, is_valid_stock,
};

use crate::repository::ProductRepository;

/// Inventory application service.
///
/// Validates inputs, applies the stock rules and delegates persistence to the
/// injected repository. Rejections are reported as `false` / `None`:
///
/// - any input that fails validation is rejected **before** the repository
///   is touched
/// - repository results are returned verbatim and never retried
#[derive(Debug)]
pub struct InventoryService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> InventoryService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Register a new product; its code must not be taken yet.
    pub fn add_product(&self, product: &Product) -> bool {
        if !is_valid_product(Some(product)) {
            debug!(product = %product, "add product rejected: invalid product");
            return false;
        }
        let Some(code) = product.code() else {
            return false;
        };
        if self.repository.find_by_code(code).is_some() {
            debug!(code, "add product rejected: code already exists");
            return false;
        }

        let saved = self.repository.save(product);
        if saved {
            info!(code, "product added");
        }
        saved
    }

    /// Delete a product; only allowed once its stock has run down to zero.
    pub fn remove_product(&self, code: &str) -> bool {
        if !is_valid_product_code(Some(code)) {
            debug!(code, "remove product rejected: invalid code");
            return false;
        }
        let Some(product) = self.repository.find_by_code(code) else {
            debug!(code, "remove product rejected: not found");
            return false;
        };
        if product.stock() != 0 {
            debug!(code, stock = product.stock(), "remove product rejected: stock on hand");
            return false;
        }

        let deleted = self.repository.delete(code);
        if deleted {
            info!(code, "product removed");
        }
        deleted
    }

    pub fn find_product_by_code(&self, code: &str) -> Option<Product> {
        if !is_valid_product_code(Some(code)) {
            return None;
        }
        self.repository.find_by_code(code)
    }

    pub fn find_products_by_name(&self, name: &str) -> Vec<Product> {
        self.repository.find_by_name(name)
    }

    pub fn find_products_by_category(&self, category: &str) -> Vec<Product> {
        self.repository.find_by_category(category)
    }

    /// Overwrite the stock level. Does not look at the active flag.
    pub fn update_stock(&self, code: &str, new_stock: i64) -> bool {
        if !is_valid_product_code(Some(code)) || !is_valid_stock(new_stock) {
            debug!(code, new_stock, "update stock rejected: invalid input");
            return false;
        }
        if self.repository.find_by_code(code).is_none() {
            debug!(code, "update stock rejected: not found");
            return false;
        }

        let updated = self.repository.update_stock(code, new_stock);
        if updated {
            info!(code, new_stock, "stock updated");
        }
        updated
    }

    /// Take `quantity` units out of an active product's stock.
    ///
    /// All or nothing: a shortfall rejects the movement without touching
    /// the repository's stock.
    pub fn stock_out(&self, code: &str, quantity: i64) -> bool {
        let Some(product) = self.active_product_for_movement(code, quantity, "stock out") else {
            return false;
        };
        if product.stock() < quantity {
            debug!(
                code,
                quantity,
                stock = product.stock(),
                "stock out rejected: insufficient stock"
            );
            return false;
        }

        let new_stock = product.stock() - quantity;
        let updated = self.repository.update_stock(code, new_stock);
        if updated {
            info!(code, quantity, new_stock, "stock out recorded");
        }
        updated
    }

    /// Put `quantity` units into an active product's stock.
    pub fn stock_in(&self, code: &str, quantity: i64) -> bool {
        let Some(product) = self.active_product_for_movement(code, quantity, "stock in") else {
            return false;
        };

        let Some(new_stock) = product.stock().checked_add(quantity) else {
            debug!(
                code,
                quantity,
                stock = product.stock(),
                "stock in rejected: stock overflow"
            );
            return false;
        };
        let updated = self.repository.update_stock(code, new_stock);
        if updated {
            info!(code, quantity, new_stock, "stock in recorded");
        }
        updated
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        self.repository.find_low_stock()
    }

    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.repository.find_out_of_stock()
    }

    /// Sum of `price × stock` over active products.
    pub fn total_inventory_value(&self) -> f64 {
        self.repository
            .find_all()
            .iter()
            .filter(|p| p.is_active())
            .map(Product::inventory_value)
            .sum()
    }

    /// Units on hand across active products, saturating at `i64::MAX`.
    pub fn total_stock(&self) -> i64 {
        self.repository
            .find_all()
            .iter()
            .filter(|p| p.is_active())
            .try_fold(0i64, |total, p| total.checked_add(p.stock()))
            .unwrap_or_else(|| {
                debug!("total stock saturated: sum exceeds i64::MAX");
                i64::MAX
            })
    }

    /// Shared gate for stock movements: valid code, positive quantity, and an
    /// existing active product.
    fn active_product_for_movement(&self, code: &str, quantity: i64, op: &str) -> Option<Product> {
        if !is_valid_product_code(Some(code)) || !is_valid_quantity(quantity) {
            debug!(code, quantity, op, "stock movement rejected: invalid input");
            return None;
        }
        let Some(product) = self.repository.find_by_code(code) else {
            debug!(code, op, "stock movement rejected: not found");
            return None;
        };
        if !product.is_active() {
            debug!(code, op, "stock movement rejected: product inactive");
            return None;
        }
        Some(product)
    }
}
