use crate::domain::a001_order::OrderId;
use crate::domain::a002_invoice::InvoiceId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Window query for one page of order line items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItemQuery {
    /// Order whose lines are being paged
    pub order_id: OrderId,

    /// Page size (rows per fetch)
    pub page_size: usize,

    /// Zero-based offset of the first row
    pub page_offset: usize,
}

/// Total number of lines for an order, fetched before paging starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemCountResponse {
    pub count: i64,
}

/// Partial update of one order line, keyed by line id.
/// Absent fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub id: Uuid,

    /// Invoice date entered by the user (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    /// Order the lines belong to; set on the first submitted row only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
}

/// Request to create an invoice from the submitted line drafts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub order_items: Vec<LineItemDraft>,
}

/// Created invoice reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceResponse {
    pub invoice_id: InvoiceId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_omits_unset_fields() {
        let draft = LineItemDraft {
            id: Uuid::nil(),
            invoice_date: None,
            order_id: None,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("invoice_date"));
        assert!(!json.contains("order_id"));
    }

    #[test]
    fn draft_serializes_set_fields() {
        let draft = LineItemDraft {
            id: Uuid::nil(),
            invoice_date: Some("2024-03-01".to_string()),
            order_id: Some(OrderId::new(Uuid::nil())),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"invoice_date\":\"2024-03-01\""));
        assert!(json.contains("order_id"));
    }

    #[test]
    fn draft_deserializes_with_missing_fields() {
        let draft: LineItemDraft =
            serde_json::from_str("{\"id\":\"00000000-0000-0000-0000-000000000000\"}").unwrap();
        assert_eq!(draft.invoice_date, None);
        assert_eq!(draft.order_id, None);
    }
}
