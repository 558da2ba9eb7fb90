//! Submission rules: which buffered drafts actually get billed, and how a
//! failed create call is turned into one toast message.

use contracts::domain::a001_order::OrderId;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u601_generate_invoice::LineItemDraft;

/// Restricts the buffered drafts to rows with a non-empty invoice date.
///
/// Returns `None` when nothing qualifies; the caller then warns and must not
/// call the create operation. Otherwise the first element (and only the
/// first) is stamped with the order id so the backend can link the invoice;
/// the other rows omit the field on the wire.
pub fn build_invoice_payload(
    drafts: &[LineItemDraft],
    order_id: OrderId,
) -> Option<Vec<LineItemDraft>> {
    let mut filtered: Vec<LineItemDraft> = drafts
        .iter()
        .filter(|d| d.invoice_date.as_ref().is_some_and(|date| !date.is_empty()))
        .cloned()
        .collect();

    let first = filtered.first_mut()?;
    first.order_id = Some(order_id);
    Some(filtered)
}

/// Flattens a create-operation error body into one message.
///
/// The endpoint reports either a list of `UseCaseError`s or a single one;
/// anything unparseable falls back to the raw body, then to the status.
pub fn reduce_error_messages(status: u16, body: &str) -> String {
    if let Ok(errors) = serde_json::from_str::<Vec<UseCaseError>>(body) {
        if !errors.is_empty() {
            return errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join(", ");
        }
    }
    if let Ok(error) = serde_json::from_str::<UseCaseError>(body) {
        return error.message;
    }
    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    format!("HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn dated(id: Uuid, date: &str) -> LineItemDraft {
        LineItemDraft {
            id,
            invoice_date: Some(date.to_string()),
            order_id: None,
        }
    }

    fn undated(id: Uuid) -> LineItemDraft {
        LineItemDraft {
            id,
            invoice_date: None,
            order_id: None,
        }
    }

    #[test]
    fn payload_is_none_without_dated_rows() {
        let order_id = OrderId::new(Uuid::new_v4());
        let drafts = vec![
            undated(Uuid::new_v4()),
            // A cleared date input reports an empty string, not an absence
            LineItemDraft {
                id: Uuid::new_v4(),
                invoice_date: Some(String::new()),
                order_id: None,
            },
        ];

        assert_eq!(build_invoice_payload(&drafts, order_id), None);
        assert_eq!(build_invoice_payload(&[], order_id), None);
    }

    #[test]
    fn payload_filters_and_stamps_only_the_first_row() {
        let order_id = OrderId::new(Uuid::new_v4());
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let drafts = vec![dated(a, "2024-04-01"), undated(b), dated(c, "2024-04-02")];

        let payload = build_invoice_payload(&drafts, order_id).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].id, a);
        assert_eq!(payload[0].order_id, Some(order_id));
        assert_eq!(payload[1].id, c);
        assert_eq!(payload[1].order_id, None);
    }

    #[test]
    fn payload_preserves_draft_order() {
        let order_id = OrderId::new(Uuid::new_v4());
        let first = dated(Uuid::new_v4(), "2024-04-01");
        let second = dated(Uuid::new_v4(), "2024-04-02");

        let payload = build_invoice_payload(&[first.clone(), second.clone()], order_id).unwrap();
        assert_eq!(payload[0].id, first.id);
        assert_eq!(payload[0].invoice_date, first.invoice_date);
        // The second row goes out exactly as recorded
        assert_eq!(payload[1], second);
    }

    #[test]
    fn payload_building_leaves_the_input_untouched() {
        let order_id = OrderId::new(Uuid::new_v4());
        let drafts = vec![dated(Uuid::new_v4(), "2024-04-01")];
        let before = drafts.clone();

        let _ = build_invoice_payload(&drafts, order_id);
        assert_eq!(drafts, before);
    }

    #[test]
    fn reduce_joins_an_error_array() {
        let body = r#"[
            {"code":"VALIDATION_ERROR","message":"Date out of range","details":null},
            {"code":"VALIDATION_ERROR","message":"Order locked","details":null}
        ]"#;
        assert_eq!(
            reduce_error_messages(400, body),
            "Date out of range, Order locked"
        );
    }

    #[test]
    fn reduce_accepts_a_single_error_object() {
        let body = r#"{"code":"NOT_FOUND","message":"Order not found","details":"id mismatch"}"#;
        assert_eq!(reduce_error_messages(404, body), "Order not found");
    }

    #[test]
    fn reduce_falls_back_to_raw_body_then_status() {
        assert_eq!(reduce_error_messages(500, "upstream failure"), "upstream failure");
        assert_eq!(reduce_error_messages(502, "   "), "HTTP 502");
        assert_eq!(reduce_error_messages(503, ""), "HTTP 503");
    }

    #[test]
    fn reduce_ignores_an_empty_error_array() {
        assert_eq!(reduce_error_messages(500, "[]"), "[]");
    }
}
