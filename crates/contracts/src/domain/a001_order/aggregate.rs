use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the Order aggregate (a001)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Product referenced by an order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: Uuid,
    pub name: String,
}

/// One product line within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Stable line identifier, unique within the order
    pub id: Uuid,

    /// Product this line sells
    pub product: ProductRef,

    /// Invoice date (YYYY-MM-DD); empty or absent until set by the user
    pub invoice_date: Option<String>,

    /// Price per unit
    pub unit_price: f64,

    /// Ordered quantity
    pub quantity: f64,

    /// Line total as computed by the backend
    pub total_price: f64,
}

/// Order document (aggregate a001)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    /// Document number (e.g. "ORD-00000127")
    pub order_no: String,

    /// Customer display name
    pub customer: String,

    /// Order date (YYYY-MM-DD)
    pub ordered_at: String,

    /// Order total
    pub total_amount: f64,

    /// Number of product lines
    pub line_count: i64,
}
