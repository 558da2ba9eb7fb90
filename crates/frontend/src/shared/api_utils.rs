//! URL helpers for talking to the backend.

/// Base URL for API requests.
///
/// The backend listens on port 3000 next to whatever host serves the
/// frontend, so the base is derived from the current window location.
/// Outside a browser context this returns an empty string.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    format!(
        "{}//{}:3000",
        location.protocol().unwrap_or_else(|_| "http:".into()),
        location.hostname().unwrap_or_else(|_| "127.0.0.1".into())
    )
}

/// Full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
