//! Domain layer for the order payment core.
//!
//! This crate provides the core domain types:
//! - Money and OrderLine value objects
//! - Order aggregate with a cached derived total
//! - OrderStatus state machine guarding mutation and payment

pub mod order;

pub use order::{Money, MoneyError, Order, OrderError, OrderLine, OrderStatus, DEFAULT_CURRENCY};
