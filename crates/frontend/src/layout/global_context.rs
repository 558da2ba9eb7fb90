use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Application-wide tab store, provided as context from the root.
///
/// Holds the opened tabs, the active tab key and the sidebar state.
/// Navigation anywhere in the app means opening or activating a tab here.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Sync the active tab with the `?active=` URL parameter.
    ///
    /// On startup restores the tab named in the URL; afterwards mirrors
    /// every activation back into the URL via history.replaceState so
    /// reloads land on the same tab.
    pub fn init_router_integration(&self) {
        if let Some(key) = active_key_from_url() {
            let known = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
            if known {
                self.activate_tab(&key);
            } else {
                let title = crate::layout::tabs::tab_label_for_key(&key).to_string();
                self.open_tab(&key, &title);
            }
        }

        let active = self.active;
        Effect::new(move |_| {
            if let Some(key) = active.get() {
                write_active_key_to_url(&key);
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let known = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !known {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Closes a tab. If it was the active one, the last remaining tab
    /// takes over.
    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));

        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let fallback = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(fallback);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

fn active_key_from_url() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").cloned()
}

fn write_active_key_to_url(key: &str) {
    let params = HashMap::from([("active".to_string(), key.to_string())]);
    let query = serde_qs::to_string(&params).unwrap_or_default();
    let new_search = format!("?{}", query);

    let Some(w) = window() else { return };
    let current = w.location().search().unwrap_or_default();
    if current == new_search {
        return;
    }
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_search));
    }
}
