//! Standalone helpers
pub mod temperature;
