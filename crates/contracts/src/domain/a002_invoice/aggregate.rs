use crate::domain::a001_order::OrderId;
use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the Invoice aggregate (a002)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One billed line within an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product_name: String,

    /// Invoice date carried over from the order line (YYYY-MM-DD)
    pub invoice_date: String,

    pub unit_price: f64,
    pub quantity: f64,
    pub total_price: f64,
}

/// Invoice document (aggregate a002)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,

    /// Document number (e.g. "INV-00000031")
    pub invoice_no: String,

    /// Order this invoice was generated from
    pub order_id: OrderId,

    /// Creation timestamp assigned by the backend
    pub created_at: DateTime<Utc>,

    /// Invoice total
    pub total_amount: f64,

    pub lines: Vec<InvoiceLine>,
}
