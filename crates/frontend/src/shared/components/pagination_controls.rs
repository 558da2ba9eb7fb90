use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls - back/forward pager with a "current of total" label.
///
/// The host decides whether a move is allowed; the buttons only report
/// the press through the callbacks.
#[component]
pub fn PaginationControls(
    /// Label between the buttons, e.g. "2 of 5" (empty while unknown)
    #[prop(into)]
    label: Signal<String>,

    /// Whether the back button is enabled
    #[prop(into)]
    can_back: Signal<bool>,

    /// Whether the forward button is enabled
    #[prop(into)]
    can_forward: Signal<bool>,

    /// Callback on back press
    on_back: Callback<()>,

    /// Callback on forward press
    on_forward: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_back.run(())
                disabled=move || !can_back.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || label.get()}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_forward.run(())
                disabled=move || !can_forward.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
