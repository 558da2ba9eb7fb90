//! Pure state for the invoice generator: fetch classification, the page
//! window and the draft-edit buffer. No signals here, the view wraps these
//! in `RwSignal`s.

use contracts::domain::a001_order::OrderLineItem;
use contracts::usecases::u601_generate_invoice::LineItemDraft;
use uuid::Uuid;

/// Rows shown per grid page
pub const PAGE_SIZE: usize = 5;

/// Shown instead of the grid when the order has no line items
pub const NO_PRODUCTS_MESSAGE: &str =
    "Order does not have Order Products. Add Order Products to your Order and try again.";

/// One grid row: a line item annotated with its product name for display
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemRow {
    pub id: Uuid,
    pub product_name: String,
    pub invoice_date: Option<String>,
    pub unit_price: f64,
    pub quantity: f64,
    pub total_price: f64,
}

/// Flattens fetched line items into display rows, copying `product.name`
/// onto each row. Order and count are preserved.
pub fn annotate_rows(items: Vec<OrderLineItem>) -> Vec<LineItemRow> {
    items
        .into_iter()
        .map(|item| LineItemRow {
            id: item.id,
            product_name: item.product.name,
            invoice_date: item.invoice_date,
            unit_price: item.unit_price,
            quantity: item.quantity,
            total_price: item.total_price,
        })
        .collect()
}

/// What one page fetch means for the view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Non-empty page: render the grid
    Rows(Vec<LineItemRow>),
    /// Order has no line items at all: grid stays unset, fixed message shown
    NoProducts,
    /// Transport or server failure
    Failed(String),
}

pub fn classify_fetch(result: Result<Vec<OrderLineItem>, String>) -> FetchOutcome {
    match result {
        Ok(items) if items.is_empty() => FetchOutcome::NoProducts,
        Ok(items) => FetchOutcome::Rows(annotate_rows(items)),
        Err(message) => FetchOutcome::Failed(message),
    }
}

/// Page window over the order's line items.
///
/// `page_total` stays `None` until the count fetch resolves; until then no
/// forward move is permitted. Refused moves leave the state untouched so the
/// caller knows not to publish a new query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    /// 1-based page number
    pub page_current: usize,
    /// Total pages, unknown before the count resolves
    pub page_total: Option<usize>,
    pub page_size: usize,
    /// Zero-based offset of the first row on the current page
    pub page_offset: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_current: 1,
            page_total: None,
            page_size,
            page_offset: 0,
        }
    }

    /// Derives the page count from the row count. Zero rows give zero pages.
    pub fn apply_count(&mut self, count: i64) {
        let rows = count.max(0) as usize;
        self.page_total = Some(rows.div_ceil(self.page_size));
    }

    pub fn can_forward(&self) -> bool {
        match self.page_total {
            Some(total) => total > 0 && self.page_offset < self.page_size * (total - 1),
            None => false,
        }
    }

    pub fn can_back(&self) -> bool {
        self.page_offset >= self.page_size
    }

    /// Advances one page. Returns whether the move happened.
    pub fn forward(&mut self) -> bool {
        if !self.can_forward() {
            return false;
        }
        self.page_offset += self.page_size;
        self.page_current += 1;
        true
    }

    /// Goes back one page. Returns whether the move happened.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.page_offset -= self.page_size;
        self.page_current -= 1;
        true
    }

    /// Footer label, e.g. "2 of 4". Empty until the count is known.
    pub fn page_of(&self) -> String {
        match self.page_total {
            Some(total) if total > 0 => format!("{} of {}", self.page_current, total),
            _ => String::new(),
        }
    }
}

/// Accumulated per-row edits, in first-edit order.
///
/// Re-recording an id replaces the whole draft in place, it does not move
/// it to the end. Page changes and submissions never clear the buffer, so
/// edits from several pages pile up until the panel is torn down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer {
    entries: Vec<LineItemDraft>,
}

impl EditBuffer {
    /// Upserts each draft by line id, keeping the original insertion position
    pub fn record(&mut self, drafts: Vec<LineItemDraft>) {
        for draft in drafts {
            match self.entries.iter_mut().find(|e| e.id == draft.id) {
                Some(slot) => *slot = draft,
                None => self.entries.push(draft),
            }
        }
    }

    /// The buffered invoice date for a line, if one was entered
    pub fn date_for(&self, id: Uuid) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| e.invoice_date.clone())
    }

    /// All buffered drafts in insertion order
    pub fn snapshot(&self) -> Vec<LineItemDraft> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::ProductRef;

    fn line_item(name: &str, date: Option<&str>) -> OrderLineItem {
        OrderLineItem {
            id: Uuid::new_v4(),
            product: ProductRef {
                id: Uuid::new_v4(),
                name: name.to_string(),
            },
            invoice_date: date.map(|d| d.to_string()),
            unit_price: 10.0,
            quantity: 2.0,
            total_price: 20.0,
        }
    }

    fn draft(id: Uuid, date: &str) -> LineItemDraft {
        LineItemDraft {
            id,
            invoice_date: Some(date.to_string()),
            order_id: None,
        }
    }

    #[test]
    fn annotate_copies_product_names_onto_rows() {
        let items = vec![line_item("Widget", None), line_item("Gadget", Some("2024-05-01"))];
        let rows = annotate_rows(items.clone());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, items[0].id);
        assert_eq!(rows[0].product_name, "Widget");
        assert_eq!(rows[0].invoice_date, None);
        assert_eq!(rows[1].product_name, "Gadget");
        assert_eq!(rows[1].invoice_date.as_deref(), Some("2024-05-01"));
        assert_eq!(rows[1].total_price, 20.0);
    }

    #[test]
    fn empty_fetch_means_no_products_not_empty_grid() {
        assert_eq!(classify_fetch(Ok(vec![])), FetchOutcome::NoProducts);
    }

    #[test]
    fn non_empty_fetch_becomes_rows() {
        let outcome = classify_fetch(Ok(vec![line_item("Widget", None)]));
        match outcome {
            FetchOutcome::Rows(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected Rows, got {:?}", other),
        }
    }

    #[test]
    fn failed_fetch_carries_the_message() {
        let outcome = classify_fetch(Err("Network error: timeout".to_string()));
        assert_eq!(
            outcome,
            FetchOutcome::Failed("Network error: timeout".to_string())
        );
    }

    #[test]
    fn forward_refused_before_count_known() {
        let mut page = PageState::new(5);
        assert!(!page.forward());
        assert_eq!(page, PageState::new(5));
    }

    #[test]
    fn forward_walks_to_last_page_then_stops() {
        let mut page = PageState::new(5);
        page.apply_count(12);
        assert_eq!(page.page_total, Some(3));

        assert!(page.forward());
        assert!(page.forward());
        assert_eq!(page.page_current, 3);
        assert_eq!(page.page_offset, 10);

        // Last page reached, nothing changes on further presses
        assert!(!page.forward());
        assert_eq!(page.page_current, 3);
        assert_eq!(page.page_offset, 10);
    }

    #[test]
    fn back_refused_on_first_page() {
        let mut page = PageState::new(5);
        page.apply_count(12);
        assert!(!page.back());
        assert_eq!(page.page_current, 1);
        assert_eq!(page.page_offset, 0);
    }

    #[test]
    fn zero_rows_mean_zero_pages() {
        let mut page = PageState::new(5);
        page.apply_count(0);
        assert_eq!(page.page_total, Some(0));
        assert!(!page.forward());
        assert_eq!(page.page_of(), "");
    }

    #[test]
    fn exact_multiple_of_page_size_has_no_extra_page() {
        let mut page = PageState::new(5);
        page.apply_count(10);
        assert_eq!(page.page_total, Some(2));
        assert!(page.forward());
        assert!(!page.forward());
    }

    #[test]
    fn page_of_reads_current_of_total() {
        let mut page = PageState::new(5);
        assert_eq!(page.page_of(), "");

        page.apply_count(8);
        assert_eq!(page.page_of(), "1 of 2");
        assert!(page.forward());
        assert_eq!(page.page_of(), "2 of 2");
        assert!(page.back());
        assert_eq!(page.page_of(), "1 of 2");
    }

    #[test]
    fn record_keeps_last_draft_in_original_position() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut buffer = EditBuffer::default();

        buffer.record(vec![draft(a, "2024-01-10")]);
        buffer.record(vec![draft(b, "2024-01-11")]);
        buffer.record(vec![draft(a, "2024-02-20")]);

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, a);
        assert_eq!(snapshot[0].invoice_date.as_deref(), Some("2024-02-20"));
        assert_eq!(snapshot[1].id, b);
        assert_eq!(snapshot[1].invoice_date.as_deref(), Some("2024-01-11"));
    }

    #[test]
    fn drafts_accumulate_across_record_calls() {
        // Page moves never clear the buffer, so edits made on different
        // pages all survive into the snapshot.
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let mut buffer = EditBuffer::default();

        buffer.record(vec![draft(ids[0], "2024-03-01"), draft(ids[1], "2024-03-02")]);
        buffer.record(vec![draft(ids[2], "2024-03-03")]);

        let recorded: Vec<Uuid> = buffer.snapshot().iter().map(|d| d.id).collect();
        assert_eq!(recorded, ids);
    }

    #[test]
    fn date_for_returns_buffered_edit() {
        let id = Uuid::new_v4();
        let mut buffer = EditBuffer::default();
        assert_eq!(buffer.date_for(id), None);

        buffer.record(vec![draft(id, "2024-06-15")]);
        assert_eq!(buffer.date_for(id).as_deref(), Some("2024-06-15"));
    }
}
