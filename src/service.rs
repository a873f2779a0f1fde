//! Inventory transaction boundary.
//!
//! `InventoryService` guards the product reference and the adjustment amount
//! before handing off to the product, which repeats its own amount check.

use crate::{InventoryError, Product, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self { Self }

    /// Remove `amount` units through a sale. Insufficient stock from the
    /// product is returned unchanged.
    pub fn sell_product(&self, product: Option<&mut Product>, amount: i64) -> Result<()> {
        let product = validate_product(product)?;
        validate_adjustment(amount)?;
        product.decrease_stock(amount)
    }

    pub fn restock_product(&self, product: Option<&mut Product>, amount: i64) -> Result<()> {
        let product = validate_product(product)?;
        validate_adjustment(amount)?;
        product.increase_stock(amount)
    }
}

fn validate_product(product: Option<&mut Product>) -> Result<&mut Product> {
    product.ok_or_else(|| InventoryError::invalid("Invalid product."))
}

fn validate_adjustment(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(InventoryError::invalid("Quantity must be greater than 0."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rust_decimal::Decimal;
    use std::rc::Rc;

    fn tomato() -> Product {
        let produce = Rc::new(Category::new(1, "Produce", None).unwrap());
        Product::new(1, "Tomato", Decimal::new(25, 2), 30, produce).unwrap()
    }

    #[test]
    fn test_sell_and_restock_scenario() {
        let service = InventoryService::new();
        let mut p = tomato();
        service.sell_product(Some(&mut p), 5).unwrap();
        assert_eq!(p.quantity_in_stock(), 25);
        let err = service.sell_product(Some(&mut p), 100).unwrap_err();
        assert_eq!(err, InventoryError::InsufficientStock);
        assert_eq!(p.quantity_in_stock(), 25);
        service.restock_product(Some(&mut p), 10).unwrap();
        assert_eq!(p.quantity_in_stock(), 35);
    }

    #[test]
    fn test_missing_product_rejected() {
        let service = InventoryService::new();
        assert_eq!(service.sell_product(None, 5).unwrap_err(), InventoryError::invalid("Invalid product."));
        assert_eq!(service.restock_product(None, 5).unwrap_err(), InventoryError::invalid("Invalid product."));
    }

    #[test]
    fn test_non_positive_amount_rejected_without_mutation() {
        let service = InventoryService::new();
        let mut p = tomato();
        for amount in [0, -1, i64::MIN] {
            assert!(service.sell_product(Some(&mut p), amount).unwrap_err().is_invalid_argument());
            assert!(service.restock_product(Some(&mut p), amount).unwrap_err().is_invalid_argument());
        }
        assert_eq!(p.quantity_in_stock(), 30);
        assert!(p.take_events().is_empty());
    }
}
