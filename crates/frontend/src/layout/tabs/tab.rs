use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// One item in the tab strip: activates on click, closes on the x.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let key = StoredValue::new(tab.key);

    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str()))
    });

    // The title comes from the store, not the captured TabData, so
    // update_tab_title shows up even though <For> keys this item by key.
    let title = Memo::new(move |_| {
        key.with_value(|k| {
            tabs_store.opened.with(|tabs| {
                tabs.iter()
                    .find(|t| &t.key == k)
                    .map(|t| t.title.clone())
                    .unwrap_or_default()
            })
        })
    });

    let close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{move || title.get()}</span>
            <button class="tab-close" on:click=close>
                {icon("x")}
            </button>
        </div>
    }
}
