//! Demo entry point.
//!
//! Wires the in-memory order store and payment processor into the PayOrder
//! workflow, builds a sample order, and pays it.

mod config;

use checkout::{InMemoryOrderStore, InMemoryPaymentProcessor, OrderStore, PayOrder};
use common::OrderId;
use config::Config;
use domain::{Money, Order, OrderLine};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Create the infrastructure
    let store = InMemoryOrderStore::new();
    let processor = InMemoryPaymentProcessor::new();
    processor.set_decline_charges(config.decline_charges);

    // 3. Build and store a sample order
    let mut order = Order::new("order-123", "customer-456");
    order
        .add_line(OrderLine::new(
            "prod-1",
            "Laptop",
            1,
            Money::usd(dec!(999.99)).expect("price must be non-negative"),
        ))
        .expect("order is still pending");
    order
        .add_line(OrderLine::new(
            "prod-2",
            "Mouse",
            2,
            Money::usd(dec!(25.50)).expect("price must be non-negative"),
        ))
        .expect("order is still pending");

    tracing::info!(order_id = %order.id(), total = %order.total_amount(), "order created");
    store.save(order).await;

    // 4. Execute the payment workflow
    let workflow = PayOrder::new(store.clone(), processor);
    let order_id = OrderId::new("order-123");
    let outcome = workflow.execute(&order_id).await;

    tracing::info!(%outcome, success = outcome.is_success(), "payment result");

    // 5. Report the final stored state
    if let Some(order) = store.get_by_id(&order_id).await {
        tracing::info!(
            order_id = %order.id(),
            total = %order.total_amount(),
            status = %order.status(),
            "final order state"
        );
    }
}
