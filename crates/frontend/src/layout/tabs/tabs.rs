use super::page::TabPage;
use super::tab::Tab as TabStripItem;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Tab strip plus the stack of keep-alive tab pages.
///
/// Both lists iterate the same `opened` signal keyed by tab key, so a
/// page's DOM node lives exactly as long as its strip item.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let opened = move || tabs_store.opened.get();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For each=opened key=|tab| tab.key.clone() let:tab>
                    <TabStripItem tab=tab />
                </For>
            </div>
            <div class="tab-content">
                <For
                    each=opened
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
