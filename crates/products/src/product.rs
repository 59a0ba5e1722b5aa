use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, impl_entity_identity};

/// Stock classification derived from `(stock, minimum_stock)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Nothing on hand.
    Empty,
    /// Exactly at the minimum threshold.
    Low,
    /// Above the minimum threshold.
    Safe,
    /// On hand, but under the minimum threshold.
    Below,
}

/// Catalog product with its current stock level.
///
/// `category` is a free-text category name, not a reference to a
/// [`Category`](crate::Category). Identity is the `code` (see [`Entity`]).
///
/// Setters do not enforce invariants; use [`validation::is_valid_product`]
/// before persisting. Stock movements go through [`Product::reduce_stock`] and
/// [`Product::add_stock`], which never leave stock negative.
///
/// [`validation::is_valid_product`]: crate::validation::is_valid_product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    code: Option<String>,
    name: Option<String>,
    category: Option<String>,
    price: f64,
    stock: i64,
    minimum_stock: i64,
    active: bool,
}

impl Product {
    /// Create an active product.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        minimum_stock: i64,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            category: Some(category.into()),
            price,
            stock,
            minimum_stock,
            active: true,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn minimum_stock(&self) -> i64 {
        self.minimum_stock
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_code(&mut self, code: Option<&str>) {
        self.code = code.map(str::to_string);
    }

    pub fn set_name(&mut self, name: Option<&str>) {
        self.name = name.map(str::to_string);
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category.map(str::to_string);
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    pub fn set_minimum_stock(&mut self, minimum_stock: i64) {
        self.minimum_stock = minimum_stock;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_stock_safe(&self) -> bool {
        self.stock > self.minimum_stock
    }

    /// Stock sits exactly on the minimum threshold.
    ///
    /// With a zero minimum this is true together with [`Product::is_stock_empty`].
    pub fn is_stock_low(&self) -> bool {
        self.stock == self.minimum_stock
    }

    pub fn is_stock_empty(&self) -> bool {
        self.stock == 0
    }

    /// Single classification of the stock level; `Empty` wins over `Low`.
    pub fn stock_status(&self) -> StockStatus {
        if self.is_stock_empty() {
            StockStatus::Empty
        } else if self.is_stock_low() {
            StockStatus::Low
        } else if self.is_stock_safe() {
            StockStatus::Safe
        } else {
            StockStatus::Below
        }
    }

    /// Take `amount` units out of stock.
    ///
    /// Rejects non-positive amounts and amounts larger than what is on hand;
    /// stock is unchanged on error.
    pub fn reduce_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::AmountNotPositive);
        }
        if amount > self.stock {
            return Err(DomainError::insufficient_stock(amount, self.stock));
        }
        self.stock -= amount;
        Ok(())
    }

    /// Put `amount` units into stock. Stock is unchanged on error.
    pub fn add_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::AmountNotPositive);
        }
        self.stock = self
            .stock
            .checked_add(amount)
            .ok_or_else(|| DomainError::stock_overflow(self.stock, amount))?;
        Ok(())
    }

    /// Price of `quantity` units.
    pub fn total_price(&self, quantity: i64) -> DomainResult<f64> {
        if quantity <= 0 {
            return Err(DomainError::QuantityNotPositive);
        }
        Ok(self.price * quantity as f64)
    }

    /// Value of the stock currently on hand (`price × stock`).
    pub fn inventory_value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

impl Entity for Product {
    type Key = str;

    fn key(&self) -> Option<&str> {
        self.code()
    }
}

impl_entity_identity!(Product);

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product {{ code: {}, name: {}, category: {}, price: {}, stock: {}, minimum_stock: {}, active: {} }}",
            self.code().unwrap_or("-"),
            self.name().unwrap_or("-"),
            self.category().unwrap_or("-"),
            self.price,
            self.stock,
            self.minimum_stock,
            self.active
        )
    }
}
