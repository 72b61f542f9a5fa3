//! Shared identifier types for the order payment core.

pub mod types;

pub use types::{CustomerId, OrderId, ProductId};
