//! Order aggregate implementation.

use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use super::{Money, OrderError, OrderLine, OrderStatus};

/// Order aggregate root.
///
/// Owns its lines as a single consistency boundary: the cached total is
/// recomputed on every mutation and lines can only change while the order
/// is pending. Payment is a one-way transition guarded by [`Order::pay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    id: OrderId,

    /// Customer who placed the order.
    customer_id: CustomerId,

    /// Lines in insertion order.
    lines: Vec<OrderLine>,

    /// Current status of the order.
    status: OrderStatus,

    /// Cached total, kept consistent with the lines by every mutating call.
    total_amount: Money,
}

// Query methods
impl Order {
    /// Creates a new pending order with no lines and a zero total.
    pub fn new(id: impl Into<OrderId>, customer_id: impl Into<CustomerId>) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            lines: Vec::new(),
            status: OrderStatus::Pending,
            total_amount: Money::zero(),
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the customer ID.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the cached derived total.
    pub fn total_amount(&self) -> &Money {
        &self.total_amount
    }

    /// Returns true if the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// Command methods
impl Order {
    /// Appends a line and recomputes the total.
    ///
    /// Fails with [`OrderError::ModifiedAfterPayment`] once the order is
    /// paid, and with a currency mismatch if the new line's currency
    /// differs from the accumulated total.
    pub fn add_line(&mut self, line: OrderLine) -> Result<(), OrderError> {
        if !self.status.can_modify_lines() {
            return Err(OrderError::ModifiedAfterPayment);
        }

        self.lines.push(line);
        self.recompute_total()
    }

    /// Removes every line matching the product ID and recomputes the total.
    ///
    /// Fails with [`OrderError::ModifiedAfterPayment`] once the order is
    /// paid. Removing a product that is not present is not an error.
    pub fn remove_line(&mut self, product_id: &ProductId) -> Result<(), OrderError> {
        if !self.status.can_modify_lines() {
            return Err(OrderError::ModifiedAfterPayment);
        }

        self.lines.retain(|line| line.product_id != *product_id);
        self.recompute_total()
    }

    /// Transitions the order to paid.
    ///
    /// Fails with [`OrderError::EmptyOrder`] when there are no lines
    /// (checked before the status, so an empty order always reports empty)
    /// and with [`OrderError::AlreadyPaid`] on a repeated call. Touches no
    /// external collaborator; charging and persistence belong to the
    /// payment workflow.
    pub fn pay(&mut self) -> Result<(), OrderError> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        if self.status == OrderStatus::Paid {
            return Err(OrderError::AlreadyPaid);
        }

        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Folds the line totals into the cached total.
    ///
    /// The fold starts from zero in the default currency and fails on the
    /// first line whose currency differs from the accumulator. On failure
    /// the cached total is left untouched.
    fn recompute_total(&mut self) -> Result<(), OrderError> {
        let total = self
            .lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.add(&line.total_price()))?;
        self.total_amount = total;
        Ok(())
    }
}
