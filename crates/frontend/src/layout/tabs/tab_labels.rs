//! Tab labels - the single source of truth for tab titles.

/// Returns the human-readable tab title for a given key.
///
/// Detail tabs get a generic title here; the detail page replaces it
/// via `update_tab_title` once the document is loaded.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_order" => "Orders",
        "a002_invoice" => "Invoices",

        k if k.starts_with("a002_invoice_detail_") => "Invoice",

        _ => "",
    }
}

/// Builds a detail-tab title: `"<entity> · <identifier>"`.
///
/// Example: `detail_tab_label("Invoice", "INV-00000031")` -> `"Invoice · INV-00000031"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
