//! Tab strip configuration for the browser.
//!
//! Search order:
//! 1. JSON override in `localStorage["tabs_config"]`
//! 2. Embedded default config from `contracts`

use contracts::shared::tabs::TabsConfig;
use web_sys::window;

const STORAGE_KEY: &str = "tabs_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_tabs_config() -> TabsConfig {
    if let Some(raw) = get_local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        match TabsConfig::from_json_str(&raw) {
            Ok(config) => {
                log::info!("Loading tabs config from localStorage['{}']", STORAGE_KEY);
                return config;
            }
            Err(err) => log::warn!("Ignoring localStorage['{}']: {:#}", STORAGE_KEY, err),
        }
    }

    match TabsConfig::embedded() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Embedded tabs config is invalid: {:#}", err);
            TabsConfig::default()
        }
    }
}

