use leptos::prelude::*;

const INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; \
     font-size: 0.875rem; background: #fff; width: 140px;";

/// Native date picker bound to a yyyy-mm-dd string.
///
/// The browser renders the value in locale format; `on_change` always
/// receives yyyy-mm-dd, or an empty string when the field is cleared.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            prop:value=value
            on:input=move |ev| on_change(event_target_value(&ev))
            style=style.unwrap_or_else(|| INPUT_STYLE.to_string())
        />
    }
}
