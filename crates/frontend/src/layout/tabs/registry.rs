//! Tab content registry - the single source of truth for tab.key -> View.
//!
//! `render_tab_content` returns the view for a tab key. All tab keys
//! are gathered here in one place.

use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_invoice::ui::details::InvoiceDetails;
use crate::domain::a002_invoice::ui::list::InvoiceList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a001_order", "a002_invoice_detail_<id>")
/// * `tabs_store` - context for closing the tab from detail views
///
/// # Returns
/// AnyView with the tab content, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // a001: Orders
        "a001_order" => view! { <OrderList /> }.into_any(),

        // a002: Invoices
        "a002_invoice" => view! { <InvoiceList /> }.into_any(),
        k if k.starts_with("a002_invoice_detail_") => {
            let id = k.strip_prefix("a002_invoice_detail_").unwrap().to_string();
            view! {
                <InvoiceDetails
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
