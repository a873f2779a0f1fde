//! Domain events

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainEvent {
    Product(ProductEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductEvent {
    StockIncreased { product_id: i64, quantity: i64, in_stock: i64 },
    StockDecreased { product_id: i64, quantity: i64, in_stock: i64 },
    /// The last unit left the shelf.
    SoldOut { product_id: i64 },
}
