//! Payment processor trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::Money;

/// A charge accepted by the in-memory processor.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRecord {
    /// The order the charge was made for.
    pub order_id: OrderId,

    /// The charged amount.
    pub amount: Money,
}

/// Trait for payment processing operations.
///
/// The processor is an opaque, possibly side-effecting black box; no
/// partial-charge or retry contract is defined here.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charges the given amount for an order.
    ///
    /// Returns true when the charge is accepted.
    async fn charge(&self, order_id: &OrderId, amount: &Money) -> bool;
}

#[derive(Debug, Default)]
struct InMemoryProcessorState {
    charges: Vec<ChargeRecord>,
    decline_charges: bool,
}

/// In-memory payment processor for testing and demos.
///
/// Records every accepted charge and can be configured to decline.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentProcessor {
    state: Arc<RwLock<InMemoryProcessorState>>,
}

impl InMemoryPaymentProcessor {
    /// Creates a new in-memory processor that accepts every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the processor to decline subsequent charge calls.
    pub fn set_decline_charges(&self, decline: bool) {
        self.state.write().unwrap().decline_charges = decline;
    }

    /// Returns the number of accepted charges.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charges.len()
    }

    /// Returns the most recently accepted charge.
    pub fn last_charge(&self) -> Option<ChargeRecord> {
        self.state.read().unwrap().charges.last().cloned()
    }
}

#[async_trait]
impl PaymentProcessor for InMemoryPaymentProcessor {
    async fn charge(&self, order_id: &OrderId, amount: &Money) -> bool {
        let mut state = self.state.write().unwrap();

        if state.decline_charges {
            tracing::warn!(%order_id, %amount, "charge declined");
            return false;
        }

        tracing::info!(%order_id, %amount, "charging payment");
        state.charges.push(ChargeRecord {
            order_id: order_id.clone(),
            amount: amount.clone(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_accepted_charges_are_recorded() {
        let processor = InMemoryPaymentProcessor::new();
        let amount = Money::usd(dec!(26.00)).unwrap();

        assert!(processor.charge(&"order-1".into(), &amount).await);
        assert_eq!(processor.charge_count(), 1);

        let record = processor.last_charge().unwrap();
        assert_eq!(record.order_id, "order-1".into());
        assert_eq!(record.amount, amount);
    }

    #[tokio::test]
    async fn test_declined_charges_are_not_recorded() {
        let processor = InMemoryPaymentProcessor::new();
        processor.set_decline_charges(true);

        let amount = Money::usd(dec!(26.00)).unwrap();
        assert!(!processor.charge(&"order-1".into(), &amount).await);
        assert_eq!(processor.charge_count(), 0);
    }

    #[tokio::test]
    async fn test_decline_toggle_can_be_reset() {
        let processor = InMemoryPaymentProcessor::new();
        let amount = Money::usd(dec!(1.00)).unwrap();

        processor.set_decline_charges(true);
        assert!(!processor.charge(&"order-1".into(), &amount).await);

        processor.set_decline_charges(false);
        assert!(processor.charge(&"order-1".into(), &amount).await);
        assert_eq!(processor.charge_count(), 1);
    }
}
