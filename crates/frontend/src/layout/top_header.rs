//! Application top bar: brand plus the sidebar toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Order Desk"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || {
                        if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {move || {
                        let name = if ctx.left_open.get() {
                            "panel-left-close"
                        } else {
                            "panel-left-open"
                        };
                        icon(name)
                    }}
                </button>
            </div>
        </div>
    }
}
