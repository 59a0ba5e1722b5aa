//! Field- and object-level rules for catalog data.
//!
//! Every function is a total predicate: invalid input yields `false`, never an
//! error. Optional arguments model values that may be unset.

use crate::{Category, Product};

pub const PRODUCT_CODE_MAX_LEN: usize = 10;
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// 1–10 ASCII alphanumerics, no spaces or symbols.
pub fn is_valid_product_code(code: Option<&str>) -> bool {
    let Some(code) = code else {
        return false;
    };
    if code.trim().is_empty() {
        return false;
    }
    code.chars().count() <= PRODUCT_CODE_MAX_LEN && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Trimmed length within 3–100 characters.
pub fn is_valid_name(name: Option<&str>) -> bool {
    let Some(name) = name else {
        return false;
    };
    let len = name.trim().chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
}

pub fn is_valid_price(price: f64) -> bool {
    price > 0.0
}

pub fn is_valid_stock(stock: i64) -> bool {
    stock >= 0
}

pub fn is_valid_minimum_stock(minimum_stock: i64) -> bool {
    minimum_stock >= 0
}

pub fn is_valid_percentage(percentage: f64) -> bool {
    (0.0..=100.0).contains(&percentage)
}

pub fn is_valid_quantity(quantity: i64) -> bool {
    quantity > 0
}

/// Code and name follow the product rules; description is optional, at most
/// 500 characters.
pub fn is_valid_category(category: Option<&Category>) -> bool {
    let Some(category) = category else {
        return false;
    };
    is_valid_product_code(category.code())
        && is_valid_name(category.name())
        && category
            .description()
            .is_none_or(|d| d.chars().count() <= DESCRIPTION_MAX_LEN)
}

/// All field rules for a product.
///
/// The category only has to be a non-empty string; it is not held to the
/// name length rule. A stock level under the minimum is still valid.
pub fn is_valid_product(product: Option<&Product>) -> bool {
    let Some(product) = product else {
        return false;
    };
    is_valid_product_code(product.code())
        && is_valid_name(product.name())
        && product.category().is_some_and(|c| !c.is_empty())
        && is_valid_price(product.price())
        && is_valid_stock(product.stock())
        && is_valid_minimum_stock(product.minimum_stock())
}
