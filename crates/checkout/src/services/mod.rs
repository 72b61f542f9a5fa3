//! External collaborator traits and in-memory implementations.

pub mod processor;
pub mod store;

pub use processor::{ChargeRecord, InMemoryPaymentProcessor, PaymentProcessor};
pub use store::{InMemoryOrderStore, OrderStore};
