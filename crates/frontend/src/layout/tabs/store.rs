//! Reactive wrapper around [`TabRegistry`] for one app-details view.
//!
//! The registry stays the single source of truth; its snapshots are mirrored
//! into `tabs` so components can subscribe through the reactive graph.

use crate::layout::notice::NoticeService;
use contracts::shared::tabs::{AddTabOutcome, SubscriptionId, Tab, TabRegistry, TabsConfig};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TabsStore {
    registry: StoredValue<TabRegistry>,
    subscription: StoredValue<Option<SubscriptionId>>,
    config: StoredValue<TabsConfig>,
    notices: NoticeService,
    /// Latest published snapshot.
    pub tabs: RwSignal<Vec<Tab>>,
}

impl TabsStore {
    pub fn new(config: TabsConfig, notices: NoticeService) -> Self {
        let tabs = RwSignal::new(Vec::new());
        let mut registry = TabRegistry::new(config.clone());
        // The signal may already be disposed when the last snapshot arrives
        let subscription = registry.subscribe(move |snapshot: &[Tab]| {
            tabs.try_set(snapshot.to_vec());
        });

        Self {
            registry: StoredValue::new(registry),
            subscription: StoredValue::new(Some(subscription)),
            config: StoredValue::new(config),
            notices,
            tabs,
        }
    }

    pub fn config(&self) -> TabsConfig {
        self.config.get_value()
    }

    pub fn init(&self, base_url: &str) {
        self.registry.update_value(|r| r.init(base_url));
    }

    /// Opens (or reselects) a resource tab. At capacity a notice is shown.
    pub fn add_tab(&self, kind: &str, name: &str, url: &str) -> AddTabOutcome {
        let outcome = self
            .registry
            .try_update_value(|r| r.add_tab(kind, name, url))
            .unwrap_or(AddTabOutcome::Ignored);
        let config = self.config.get_value();
        if let Some(message) = outcome.notice(&config) {
            self.notices.error(message, config.notice_duration_ms);
        }
        outcome
    }

    /// Returns the url to navigate to when the selected tab was closed.
    pub fn remove_tab(&self, identifier: &str) -> Option<String> {
        self.registry
            .try_update_value(|r| r.remove_tab(identifier))
            .flatten()
    }

    pub fn activate_tab(&self, identifier: &str) -> bool {
        self.registry
            .try_update_value(|r| r.activate_tab(identifier))
            .unwrap_or(false)
    }

    pub fn set_current_tab(&self, identifier: &str) -> bool {
        self.registry
            .try_update_value(|r| r.set_current_tab(identifier))
            .unwrap_or(false)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.registry
            .try_with_value(|r| r.contains(identifier))
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> Vec<Tab> {
        self.registry
            .try_with_value(TabRegistry::snapshot)
            .unwrap_or_default()
    }

    /// Clears the registry and detaches the signal from it. Called on view
    /// unmount; a second call does nothing.
    pub fn dispose(&self) {
        let Some(Some(id)) = self.subscription.try_get_value() else {
            return;
        };
        self.registry.try_update_value(|r| {
            r.clear();
            r.unsubscribe(id);
        });
        self.subscription.try_set_value(None);
    }
}

/// Creates the view's store and puts it into context for the subtree.
pub fn provide_tabs_store(config: TabsConfig) -> TabsStore {
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");
    let store = TabsStore::new(config, notices);
    provide_context(store);
    store
}

pub fn use_tabs_store() -> TabsStore {
    use_context::<TabsStore>().expect("TabsStore context not found")
}
