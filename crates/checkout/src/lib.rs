//! Payment workflow for orders.
//!
//! This crate orchestrates the payment of a single order against two
//! external collaborators, each consumed through a narrow trait:
//! 1. Load the order from the store
//! 2. Apply the domain payment transition
//! 3. Charge the payment processor
//! 4. Persist the paid order
//!
//! Every failure along the way is converted into a structured
//! [`PayOrderOutcome`]; no domain error escapes the workflow boundary. A
//! declined charge skips the save, so the stored order stays pending and
//! the in-memory transition is discarded.

pub mod outcome;
pub mod pay_order;
pub mod services;

pub use outcome::PayOrderOutcome;
pub use pay_order::PayOrder;
pub use services::{
    ChargeRecord, InMemoryOrderStore, InMemoryPaymentProcessor, OrderStore, PaymentProcessor,
};
