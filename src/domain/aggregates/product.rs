//! Product Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::rc::Rc;

use crate::domain::aggregates::Category;
use crate::domain::events::{DomainEvent, ProductEvent};
use crate::domain::value_objects::Price;
use crate::{InventoryError, Result};

/// Stock-bearing catalogue entry. `quantity_in_stock` is the only field that
/// changes after construction, and only through `increase_stock`/`decrease_stock`.
#[derive(Clone, Debug)]
pub struct Product {
    id: i64,
    name: String,
    price: Price,
    quantity_in_stock: i64,
    category: Rc<Category>,
    updated_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Product {
    /// Checks run in a fixed order (id, name, price, stock) and the first
    /// failure is returned. The category cannot be absent.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: i64,
        category: Rc<Category>,
    ) -> Result<Self> {
        let name = name.into();
        if id < 0 {
            return Err(InventoryError::invalid("ID must be greater than or equal to 0."));
        }
        if name.trim().is_empty() {
            return Err(InventoryError::invalid("Invalid name."));
        }
        let price = Price::new(price)?;
        if quantity_in_stock < 0 {
            return Err(InventoryError::invalid("Quantity must be greater than or equal to 0."));
        }
        Ok(Self { id, name, price, quantity_in_stock, category, updated_at: Utc::now(), events: vec![] })
    }

    pub fn id(&self) -> i64 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> &Price { &self.price }
    pub fn quantity_in_stock(&self) -> i64 { self.quantity_in_stock }
    pub fn category(&self) -> &Category { &self.category }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn is_in_stock(&self) -> bool { self.quantity_in_stock > 0 }

    pub fn increase_stock(&mut self, amount: i64) -> Result<()> {
        validate_adjustment(amount)?;
        self.quantity_in_stock = self
            .quantity_in_stock
            .checked_add(amount)
            .ok_or_else(|| InventoryError::invalid("Stock level overflow."))?;
        self.touch();
        self.raise_event(DomainEvent::Product(ProductEvent::StockIncreased {
            product_id: self.id, quantity: amount, in_stock: self.quantity_in_stock,
        }));
        Ok(())
    }

    pub fn decrease_stock(&mut self, amount: i64) -> Result<()> {
        validate_adjustment(amount)?;
        if amount > self.quantity_in_stock {
            return Err(InventoryError::InsufficientStock);
        }
        self.quantity_in_stock -= amount;
        self.touch();
        self.raise_event(DomainEvent::Product(ProductEvent::StockDecreased {
            product_id: self.id, quantity: amount, in_stock: self.quantity_in_stock,
        }));
        if !self.is_in_stock() {
            self.raise_event(DomainEvent::Product(ProductEvent::SoldOut { product_id: self.id }));
        }
        Ok(())
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
    fn touch(&mut self) { self.updated_at = Utc::now(); }
}

fn validate_adjustment(amount: i64) -> Result<()> {
    if amount <= 0 {
        return Err(InventoryError::invalid("Quantity must be greater than 0."));
    }
    Ok(())
}
