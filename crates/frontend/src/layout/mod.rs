pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod toast_service;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::Tabs;
use toast_service::ToastHost;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Tabs                 |
/// |   (Left)  |       (Center)               |
/// +------------------------------------------+
/// ```
///
/// The toast host overlays the whole shell.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>

                <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    <Tabs />
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
