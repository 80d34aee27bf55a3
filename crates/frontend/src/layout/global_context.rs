use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// App-wide context: the current location and the navigation primitive.
///
/// Tab state is NOT kept here; every app-details view owns its own
/// [`TabsStore`](crate::layout::tabs::TabsStore).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub location: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(current_pathname()),
        }
    }

    /// Keeps `location` in sync with browser back/forward.
    pub fn init_router_integration(&self) {
        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            let path = current_pathname();
            leptos::logging::log!("↩️ popstate: '{}'", path);
            this.location.set(path);
        });
        on_cleanup(move || handle.remove());
    }

    /// Pushes `url` onto the history stack and updates `location`.
    pub fn navigate(&self, url: &str) {
        let current = self.location.get_untracked();
        if current == url {
            return;
        }
        log::debug!("navigate: '{}' -> '{}'", current, url);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
            }
        }
        self.location.set(url.to_string());
    }

    /// Same as [`navigate`](Self::navigate) without a new history entry.
    pub fn redirect(&self, url: &str) {
        log::debug!("redirect: '{}'", url);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
            }
        }
        self.location.set(url.to_string());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
