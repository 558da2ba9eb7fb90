//! Keep-alive wrapper around one tab's content.
//!
//! Content is created once when the tab opens and kept mounted but
//! hidden while another tab is active, so page state survives tab
//! switches.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    log!("TabPage created for '{}'", key);

    let content = render_tab_content(&key, tabs_store);

    let key_for_hidden = key.clone();
    let hidden = move || tabs_store.active.get().as_ref() != Some(&key_for_hidden);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=hidden data-tab-key=key>
            {content}
        </div>
    }
}
