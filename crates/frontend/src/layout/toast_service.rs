//! Toast notifications: a context service any component can push to,
//! plus the `ToastHost` that renders the queue in the shell.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before dismissing itself
const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub message: String,
}

/// Service for pushing toast notifications from anywhere in the app
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastVariant::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastVariant::Error, title.into(), message.into());
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastVariant::Warning, title.into(), message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, variant: ToastVariant, title: String, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                variant,
                title,
                message,
            })
        });
    }
}

/// Renders the toast queue. Mounted once in the shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <ToastItem toast=toast /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");
    let id = toast.id;

    // Each toast dismisses itself after the timeout
    spawn_local(async move {
        TimeoutFuture::new(AUTO_DISMISS_MS).await;
        service.dismiss(id);
    });

    let variant_class = match toast.variant {
        ToastVariant::Success => "toast toast--success",
        ToastVariant::Error => "toast toast--error",
        ToastVariant::Warning => "toast toast--warning",
    };

    view! {
        <div class=variant_class>
            <div class="toast__text">
                <strong class="toast__title">{toast.title}</strong>
                <span class="toast__message">{toast.message}</span>
            </div>
            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                {icon("x")}
            </button>
        </div>
    }
}
