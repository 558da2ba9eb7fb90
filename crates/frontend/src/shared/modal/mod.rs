use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay modal with a titled header, a body and a required footer row.
///
/// Closes on Escape, on an overlay click and on the header icon; all three
/// go through the same `on_close` callback, which carries no payload.
#[component]
pub fn Modal(
    /// Title shown in the modal header
    title: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Footer row (action buttons, pager)
    footer: ChildrenFn,
    /// Modal body
    children: Children,
) -> impl IntoView {
    // The listener is unregistered when the modal's owner is cleaned up,
    // so repeated opens do not stack handlers on the window.
    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title.clone()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">{footer()}</div>
            </div>
        </div>
    }
}
