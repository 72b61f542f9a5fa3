//! Value objects for the order domain.

use common::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency used when none is specified.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Errors that can occur during monetary operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Monetary amounts are never negative.
    #[error("Money amount cannot be negative: {amount}")]
    InvalidAmount { amount: Decimal },

    /// Amounts in different currencies cannot be combined.
    #[error("Cannot add money with different currencies: {left} and {right}")]
    CurrencyMismatch { left: String, right: String },
}

/// An exact-precision monetary amount tagged with its currency.
///
/// Immutable: every arithmetic operation returns a new instance. Addition
/// is defined only between equal currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Creates a new amount in the given currency.
    ///
    /// Fails with [`MoneyError::InvalidAmount`] when the amount is negative.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Result<Self, MoneyError> {
        if amount < Decimal::ZERO {
            return Err(MoneyError::InvalidAmount { amount });
        }
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    /// Creates a new amount in the default currency.
    pub fn usd(amount: Decimal) -> Result<Self, MoneyError> {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    /// Returns zero in the default currency.
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds another amount of the same currency.
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] when the currencies
    /// differ.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(Self {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Scales the amount by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency.clone(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

/// A product line in an order.
///
/// Quantity and identifiers are accepted as given; the aggregate does not
/// validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The product identifier.
    pub product_id: ProductId,

    /// Human-readable product name.
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub unit_price: Money,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the total price for this line (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
