use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
///
/// Wraps an opaque string to provide type safety and prevent mixing up
/// order IDs with other string-based identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to the customer who placed an order.
///
/// Not validated against any customer registry; the core treats it as an
/// opaque reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a customer ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the customer ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Product identifier (SKU).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_string_conversion() {
        let id = OrderId::new("order-123");
        assert_eq!(id.as_str(), "order-123");

        let id2: OrderId = "order-456".into();
        assert_eq!(id2.as_str(), "order-456");
    }

    #[test]
    fn test_order_id_display() {
        let id = OrderId::new("order-123");
        assert_eq!(id.to_string(), "order-123");
    }

    #[test]
    fn test_order_id_serialization_roundtrip() {
        let id = OrderId::new("order-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"order-123\"");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_customer_id_string_conversion() {
        let id = CustomerId::new("customer-456");
        assert_eq!(id.as_str(), "customer-456");
        assert_eq!(id.to_string(), "customer-456");
    }

    #[test]
    fn test_product_id_string_conversion() {
        let id = ProductId::new("prod-1");
        assert_eq!(id.as_str(), "prod-1");

        let id2: ProductId = "prod-2".into();
        assert_eq!(id2.as_str(), "prod-2");
    }

    #[test]
    fn test_ids_of_equal_content_are_equal() {
        assert_eq!(OrderId::new("a"), OrderId::new("a"));
        assert_ne!(OrderId::new("a"), OrderId::new("b"));
    }
}
