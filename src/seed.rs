//! Startup catalogue.

use rust_decimal::Decimal;
use std::rc::Rc;

use crate::{Category, Product, Result};

/// Categories and products the session starts with.
pub fn default_inventory() -> Result<Vec<Product>> {
    let produce = Rc::new(Category::new(1, "Produce", Some("This category labels produce products.".into()))?);
    let dairy = Rc::new(Category::new(2, "Dairy", Some("This category labels dairy products.".into()))?);

    Ok(vec![
        Product::new(1, "Tomato", Decimal::new(25, 2), 30, Rc::clone(&produce))?,
        Product::new(2, "Onion", Decimal::new(90, 2), 20, produce)?,
        Product::new(3, "Milk", Decimal::new(246, 2), 15, Rc::clone(&dairy))?,
        Product::new(4, "Cheese", Decimal::new(315, 2), 10, dairy)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory() {
        let items = default_inventory().unwrap();
        let names: Vec<_> = items.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Tomato", "Onion", "Milk", "Cheese"]);
        assert_eq!(items[0].category(), items[1].category());
        assert_eq!(items[2].category().name(), "Dairy");
        assert_eq!(items[3].price().amount(), Decimal::new(315, 2));
    }
}
