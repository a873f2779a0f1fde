//! Value Objects for the inventory domain

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{InventoryError, Result};

/// Unit price. Decimal keeps cents exact; negative prices are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(InventoryError::invalid("Price must be greater than or equal to 0."));
        }
        Ok(Self(amount))
    }
    pub fn zero() -> Self { Self(Decimal::ZERO) }
    pub fn amount(&self) -> Decimal { self.0 }
}

impl Default for Price { fn default() -> Self { Self::zero() } }

impl TryFrom<Decimal> for Price {
    type Error = InventoryError;
    fn try_from(amount: Decimal) -> Result<Self> { Self::new(amount) }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self { price.0 }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.2}", self.0) }
}
