//! Apex Inventory
//!
//! Console tool for tracking product stock and applying sell/restock
//! transactions.
//!
//! ## Features
//! - Category and product catalogue with validated construction
//! - Stock adjustments that never drive stock below zero
//! - Interactive sell/restock session with running counters
//! - Temperature conversions for perishable storage

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod domain;
pub mod seed;
pub mod service;
pub mod utilities;

pub use domain::aggregates::{Category, Product};
pub use domain::value_objects::Price;
pub use service::InventoryService;

// =============================================================================
// Error Types
// =============================================================================

/// Failures raised by domain constructors, stock mutations and the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("{0}")]
    InvalidArgument(String),

    /// A decrease asked for more units than are on hand.
    #[error("Requested amount exceeds amount in stock.")]
    InsufficientStock,
}

impl InventoryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Insufficient stock is a refinement of an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InsufficientStock)
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
