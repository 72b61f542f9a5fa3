//! Order store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::Order;

/// Trait for order persistence operations.
///
/// The contract is a single-record replace-by-identifier with no
/// transactional guarantee; the last writer wins.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Loads an order by ID, or `None` when no order exists under it.
    async fn get_by_id(&self, order_id: &OrderId) -> Option<Order>;

    /// Saves an order, replacing any existing order with the same ID.
    async fn save(&self, order: Order);
}

/// In-memory order store backed by a keyed map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub fn order_count(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Returns true if an order exists with the given ID.
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.read().unwrap().contains_key(order_id)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get_by_id(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.read().unwrap().get(order_id).cloned()
    }

    async fn save(&self, order: Order) {
        self.orders
            .write()
            .unwrap()
            .insert(order.id().clone(), order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Money, OrderLine};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemoryOrderStore::new();
        let order = Order::new("order-1", "customer-1");

        store.save(order.clone()).await;
        assert_eq!(store.order_count(), 1);
        assert!(store.contains(&"order-1".into()));

        let loaded = store.get_by_id(&"order-1".into()).await.unwrap();
        assert_eq!(loaded, order);
    }

    #[tokio::test]
    async fn test_missing_order_returns_none() {
        let store = InMemoryOrderStore::new();
        assert!(store.get_by_id(&"nope".into()).await.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_by_id() {
        let store = InMemoryOrderStore::new();
        store.save(Order::new("order-1", "customer-1")).await;

        let mut updated = Order::new("order-1", "customer-1");
        updated
            .add_line(OrderLine::new(
                "prod-1",
                "Widget",
                1,
                Money::usd(dec!(9.99)).unwrap(),
            ))
            .unwrap();
        store.save(updated.clone()).await;

        assert_eq!(store.order_count(), 1);
        let loaded = store.get_by_id(&"order-1".into()).await.unwrap();
        assert_eq!(loaded.line_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_map() {
        let store = InMemoryOrderStore::new();
        let handle = store.clone();

        store.save(Order::new("order-1", "customer-1")).await;
        assert!(handle.contains(&"order-1".into()));
    }
}
