//! Sidebar navigation: one collapsible "Documents" group whose items
//! open tabs in the store.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// (tab key, icon name); the label comes from `tab_label_for_key` so the
/// sidebar and the tab strip always agree.
const DOCUMENT_ITEMS: [(&str, &str); 2] = [("a001_order", "orders"), ("a002_invoice", "invoices")];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded = RwSignal::new(true);

    view! {
        <div class="app-sidebar__content">
            <div>
                <div
                    class="app-sidebar__item"
                    style:padding-left="12px"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    <div class="app-sidebar__item-content">
                        {icon("file-text")}
                        <span>"Documents"</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || expanded.get()
                    >
                        {icon("chevron-right")}
                    </div>
                </div>

                <Show when=move || expanded.get()>
                    <div class="app-sidebar__children">
                        {DOCUMENT_ITEMS
                            .iter()
                            .map(|&(key, icon_name)| {
                                let label = tab_label_for_key(key);
                                view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || {
                                            ctx.active.get().as_deref() == Some(key)
                                        }
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open_tab(key, label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
