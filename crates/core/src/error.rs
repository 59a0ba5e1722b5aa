//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised by entity operations when an argument is unusable. Each condition
/// has its own variant and a stable message so callers can match on either.
/// Business-rule rejections at the service level are *not* errors; they are
/// reported as `false` / `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stock movement amount was zero or negative.
    #[error("amount must be positive")]
    AmountNotPositive,

    /// A reduction asked for more than what is on hand.
    #[error("insufficient stock")]
    InsufficientStock { requested: i64, available: i64 },

    /// A pricing quantity was zero or negative.
    #[error("quantity must be positive")]
    QuantityNotPositive,

    /// An addition would push stock past the representable maximum.
    #[error("stock overflow")]
    StockOverflow { current: i64, amount: i64 },
}

impl DomainError {
    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn stock_overflow(current: i64, amount: i64) -> Self {
        Self::StockOverflow { current, amount }
    }

    /// Every current variant is an illegal-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::AmountNotPositive
                | Self::InsufficientStock { .. }
                | Self::QuantityNotPositive
                | Self::StockOverflow { .. }
        )
    }
}
