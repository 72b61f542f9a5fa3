//! Order aggregate and related types.

mod aggregate;
mod status;
mod value_objects;

pub use aggregate::Order;
pub use status::OrderStatus;
pub use value_objects::{Money, MoneyError, OrderLine, DEFAULT_CURRENCY};

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The error texts are user-facing: the payment workflow surfaces them
/// verbatim in its failure outcomes.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Lines cannot change once the order is paid.
    #[error("Cannot modify order after payment")]
    ModifiedAfterPayment,

    /// An order with no lines cannot be paid.
    #[error("Cannot pay empty order")]
    EmptyOrder,

    /// The order has already been paid.
    #[error("Order already paid")]
    AlreadyPaid,

    /// A monetary operation failed while recomputing the total.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
