//! Standard root wrapper for every page rendered inside a tab.

use leptos::prelude::*;

/// Wraps a tab page and stamps metadata onto its root DOM element:
/// an `id` of the form `"{entity}--{category}"` and a
/// `data-page-category` attribute ("list", "detail" or "usecase").
/// Detail pages additionally get the `page--detail` modifier class.
#[component]
pub fn PageFrame(
    /// HTML id, e.g. `"a001_order--list"`
    page_id: &'static str,
    /// "list", "detail" or "usecase"
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if category == "detail" {
        "page page--detail"
    } else {
        "page"
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
