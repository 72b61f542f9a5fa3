//! The PayOrder workflow.

use common::OrderId;

use crate::outcome::PayOrderOutcome;
use crate::services::processor::PaymentProcessor;
use crate::services::store::OrderStore;

/// Orchestrates the payment of a single order.
///
/// The sequence is fixed: load the order, apply the domain transition,
/// charge the processor, persist. A failed domain transition attempts no
/// charge; a declined charge skips the save, so the stored order keeps its
/// pending status and the in-memory transition is discarded.
pub struct PayOrder<S, P>
where
    S: OrderStore,
    P: PaymentProcessor,
{
    store: S,
    processor: P,
}

impl<S, P> PayOrder<S, P>
where
    S: OrderStore,
    P: PaymentProcessor,
{
    /// Creates a new workflow over the given collaborators.
    pub fn new(store: S, processor: P) -> Self {
        Self { store, processor }
    }

    /// Executes the payment for the given order.
    ///
    /// Every failure is translated into a [`PayOrderOutcome::Failure`]
    /// carrying the human-readable reason; this method never returns a raw
    /// domain error and never retries.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, order_id: &OrderId) -> PayOrderOutcome {
        metrics::counter!("pay_order_attempts_total").increment(1);

        // 1. Load the order
        let Some(mut order) = self.store.get_by_id(order_id).await else {
            tracing::warn!(%order_id, "order not found");
            return PayOrderOutcome::failure("Order not found");
        };

        // 2. Apply the domain transition
        if let Err(e) = order.pay() {
            tracing::warn!(%order_id, error = %e, "payment rejected by order");
            return PayOrderOutcome::failure(e.to_string());
        }

        // 3. Charge the processor
        let total = order.total_amount().clone();
        if !self.processor.charge(order_id, &total).await {
            metrics::counter!("pay_order_declined_total").increment(1);
            tracing::warn!(%order_id, amount = %total, "payment gateway declined the charge");
            return PayOrderOutcome::failure("Payment gateway failed");
        }

        // 4. Persist the paid order
        self.store.save(order).await;

        metrics::counter!("pay_order_completed_total").increment(1);
        tracing::info!(%order_id, amount = %total, "order paid");
        PayOrderOutcome::success(order_id.clone(), &total)
    }
}
