use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide ToastService for notifications from any component.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
