//! Observable store of the open tabs of one app-details view.
//!
//! Every mutation publishes the complete ordered list to all subscribers;
//! there are no delta updates. A registry is created per view mount and
//! dropped with it, nothing lives in process-wide state.

use super::config::TabsConfig;
use super::tab::{normalize_identifier, Tab};

type Subscriber = Box<dyn Fn(&[Tab]) + Send + Sync>;

/// Handle returned by [`TabRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of [`TabRegistry::add_tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTabOutcome {
    /// Kind, name or url was empty; nothing happened.
    Ignored,
    Added,
    /// The tab was already open and is now selected.
    Reselected,
    /// The registry is full; nothing changed. The caller shows a notice.
    CapacityReached { max: usize },
}

impl AddTabOutcome {
    /// Notice to show for this outcome; only a rejected add has one.
    pub fn notice(&self, config: &TabsConfig) -> Option<String> {
        match self {
            Self::CapacityReached { .. } => Some(config.capacity_notice()),
            _ => None,
        }
    }
}

pub struct TabRegistry {
    config: TabsConfig,
    tabs: Vec<Tab>,
    current_tab: Option<String>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TabRegistry {
    pub fn new(config: TabsConfig) -> Self {
        Self {
            config,
            tabs: Vec::new(),
            current_tab: None,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Drops all tabs and recreates the default (fixed) set under `base_url`.
    pub fn init(&mut self, base_url: &str) {
        let base = base_url.trim_end_matches('/');
        self.tabs = self
            .config
            .default_tabs
            .iter()
            .enumerate()
            .map(|(idx, segment)| Tab::fixed(segment, format!("{}/{}", base, segment), idx == 0))
            .collect();
        self.current_tab = None;
        log::info!("tabs init: base='{}', {} default tabs", base, self.tabs.len());
        self.publish();
    }

    pub fn add_tab(&mut self, kind: &str, name: &str, url: &str) -> AddTabOutcome {
        if kind.is_empty() || name.is_empty() || url.is_empty() {
            log::debug!(
                "add_tab ignored: kind='{}', name='{}', url='{}'",
                kind,
                name,
                url
            );
            return AddTabOutcome::Ignored;
        }

        // Capacity is checked before duplicate detection: at the limit even an
        // already open tab is not reselected through add_tab.
        if self.tabs.len() >= self.config.max_tabs {
            log::warn!(
                "add_tab rejected: {} tabs open, max {}",
                self.tabs.len(),
                self.config.max_tabs
            );
            return AddTabOutcome::CapacityReached {
                max: self.config.max_tabs,
            };
        }

        let tab = Tab::resource(kind, name, url, self.config.name_suffix_len);
        let outcome = if self.select_only(&tab.identifier) {
            log::debug!("add_tab: '{}' already open, reselected", tab.identifier);
            AddTabOutcome::Reselected
        } else {
            log::debug!("add_tab: '{}' -> {}", tab.identifier, tab.target_url);
            self.tabs.push(tab);
            AddTabOutcome::Added
        };
        self.publish();
        outcome
    }

    /// Removes the tab and returns the url to navigate to when the removed tab
    /// was the selected one (the new first tab's url).
    pub fn remove_tab(&mut self, identifier: &str) -> Option<String> {
        let key = normalize_identifier(identifier);
        let idx = self.tabs.iter().position(|t| t.identifier == key)?;
        let removed = self.tabs.remove(idx);
        log::debug!("remove_tab: '{}', {} left", removed.identifier, self.tabs.len());

        let mut fallback_url = None;
        if removed.is_selected {
            for (i, tab) in self.tabs.iter_mut().enumerate() {
                tab.is_selected = i == 0;
            }
            fallback_url = self.tabs.first().map(|t| t.target_url.clone());
        }
        if self.current_tab.as_deref() == Some(key.as_str()) {
            self.current_tab = None;
        }
        self.publish();
        fallback_url
    }

    /// Selects the matching tab; unknown identifiers change nothing.
    pub fn activate_tab(&mut self, identifier: &str) -> bool {
        let key = normalize_identifier(identifier);
        if !self.contains(&key) {
            log::debug!("activate_tab: '{}' not open", key);
            return false;
        }
        self.select_only(&key);
        self.publish();
        true
    }

    /// Remembers the route-selected tab and activates it.
    pub fn set_current_tab(&mut self, identifier: &str) -> bool {
        self.current_tab = Some(normalize_identifier(identifier));
        self.activate_tab(identifier)
    }

    pub fn current_tab(&self) -> Option<&str> {
        self.current_tab.as_deref()
    }

    /// Drops every tab and publishes the empty list. Used on view teardown.
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.current_tab = None;
        self.publish();
    }

    pub fn contains(&self, identifier: &str) -> bool {
        let key = normalize_identifier(identifier);
        self.tabs.iter().any(|t| t.identifier == key)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn snapshot(&self) -> Vec<Tab> {
        self.tabs.clone()
    }

    pub fn selected(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.is_selected)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Registers a callback that receives every future snapshot.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Tab]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    /// Selects `key` and deselects everything else. Returns whether `key` was found.
    fn select_only(&mut self, key: &str) -> bool {
        let mut found = false;
        for tab in self.tabs.iter_mut() {
            tab.is_selected = tab.identifier == key;
            found |= tab.is_selected;
        }
        found
    }

    fn publish(&self) {
        for (_, callback) in &self.subscribers {
            callback(&self.tabs);
        }
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new(TabsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn selected_count(registry: &TabRegistry) -> usize {
        registry.tabs().iter().filter(|t| t.is_selected).count()
    }

    fn recording(registry: &mut TabRegistry) -> Arc<Mutex<Vec<Vec<Tab>>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        registry.subscribe(move |tabs| sink.lock().unwrap().push(tabs.to_vec()));
        seen
    }

    #[test]
    fn test_init_creates_default_tabs() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");

        let tabs = registry.snapshot();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].display_name, "k8s-resources");
        assert_eq!(tabs[0].target_url, "/app/1/k8s-resources");
        assert_eq!(tabs[1].display_name, "log-analyzer");
        assert!(tabs[0].is_selected);
        assert!(!tabs[1].is_selected);
        assert!(tabs.iter().all(|t| t.is_fixed));
    }

    #[test]
    fn test_init_resets_everything() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1/");
        registry.add_tab("Pod", "my-pod-abcdef", "/app/1/pod/my-pod-abcdef");
        registry.set_current_tab("log-analyzer");
        registry.init("/app/2");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.current_tab(), None);
        assert_eq!(registry.tabs()[0].target_url, "/app/2/k8s-resources");
    }

    #[test]
    fn test_add_select_remove_scenario() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");

        let outcome = registry.add_tab("Pod", "my-pod-abcdef", "/app/1/pod/my-pod-abcdef");
        assert_eq!(outcome, AddTabOutcome::Added);
        let tabs = registry.snapshot();
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[2].display_name, "Pod/...abcdef");
        assert!(tabs[2].is_selected);
        assert_eq!(selected_count(&registry), 1);

        let fallback = registry.remove_tab("Pod/...abcdef");
        assert_eq!(fallback.as_deref(), Some("/app/1/k8s-resources"));
        let tabs = registry.snapshot();
        assert_eq!(tabs.len(), 2);
        assert!(tabs[0].is_selected);
        assert_eq!(selected_count(&registry), 1);
    }

    #[test]
    fn test_add_ignores_empty_arguments() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        let seen = recording(&mut registry);

        assert_eq!(registry.add_tab("", "x", "/u"), AddTabOutcome::Ignored);
        assert_eq!(registry.add_tab("Pod", "", "/u"), AddTabOutcome::Ignored);
        assert_eq!(registry.add_tab("Pod", "x", ""), AddTabOutcome::Ignored);
        assert_eq!(registry.len(), 2);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_add_selects_instead_of_appending() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        registry.add_tab("Pod", "alpha-000001", "/a");
        registry.add_tab("Pod", "beta-000002", "/b");
        // Same suffix, different case: same identifier.
        let outcome = registry.add_tab("POD", "ALPHA-000001", "/a2");

        assert_eq!(outcome, AddTabOutcome::Reselected);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.selected().map(|t| t.target_url.as_str()), Some("/a"));
        assert_eq!(selected_count(&registry), 1);
    }

    #[test]
    fn test_capacity_rejects_sixth_add() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");

        let mut notices = 0;
        for i in 0..6 {
            let name = format!("resource-{:06}", i);
            match registry.add_tab("Pod", &name, &format!("/app/1/pod/{}", name)) {
                AddTabOutcome::CapacityReached { max } => {
                    assert_eq!(max, 7);
                    notices += 1;
                }
                AddTabOutcome::Added => {}
                other => panic!("unexpected outcome {:?}", other),
            }
        }

        assert_eq!(registry.len(), 7);
        assert_eq!(notices, 1);
    }

    #[test]
    fn test_full_registry_never_changes() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        for i in 0..5 {
            registry.add_tab("Pod", &format!("p-{:06}", i), "/u");
        }
        let before = registry.snapshot();
        let seen = recording(&mut registry);

        // Even an already open tab is rejected at the limit.
        let outcome = registry.add_tab("Pod", "p-000001", "/u");
        assert_eq!(outcome, AddTabOutcome::CapacityReached { max: 7 });
        assert_eq!(registry.snapshot(), before);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unselected_keeps_selection() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        registry.add_tab("Pod", "first-aaaaaa", "/first");
        registry.add_tab("Pod", "second-bbbbbb", "/second");

        assert_eq!(registry.remove_tab("pod/...aaaaaa"), None);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.selected().map(|t| t.target_url.as_str()), Some("/second"));
    }

    #[test]
    fn test_remove_selected_first_tab() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");

        let fallback = registry.remove_tab("K8S-RESOURCES");
        assert_eq!(fallback.as_deref(), Some("/app/1/log-analyzer"));
        assert_eq!(registry.len(), 1);
        assert!(registry.tabs()[0].is_selected);
    }

    #[test]
    fn test_remove_last_tab_leaves_nothing_selected() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        registry.remove_tab("log-analyzer");
        assert_eq!(registry.remove_tab("k8s-resources"), None);
        assert!(registry.is_empty());
        assert_eq!(selected_count(&registry), 0);
    }

    #[test]
    fn test_unknown_identifier_is_noop() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        let before = registry.snapshot();
        let seen = recording(&mut registry);

        assert_eq!(registry.remove_tab("nope"), None);
        assert!(!registry.activate_tab("nope"));
        assert_eq!(registry.snapshot(), before);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_activate_selects_exactly_one() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        registry.add_tab("Pod", "my-pod-abcdef", "/pod");

        for id in ["log-analyzer", "POD/...ABCDEF", "k8s-resources"] {
            assert!(registry.activate_tab(id));
            let tabs = registry.snapshot();
            for tab in &tabs {
                assert_eq!(tab.is_selected, tab.matches(id), "tab {}", tab.identifier);
            }
        }
    }

    #[test]
    fn test_set_current_tab() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        assert!(registry.set_current_tab("Log-Analyzer"));
        assert_eq!(registry.current_tab(), Some("log-analyzer"));
        assert_eq!(registry.selected().map(|t| t.identifier.as_str()), Some("log-analyzer"));

        registry.remove_tab("log-analyzer");
        assert_eq!(registry.current_tab(), None);
    }

    #[test]
    fn test_subscribers_receive_full_snapshots() {
        let mut registry = TabRegistry::default();
        let seen = recording(&mut registry);
        let other = recording(&mut registry);

        registry.init("/app/1");
        registry.add_tab("Pod", "my-pod-abcdef", "/pod");
        registry.activate_tab("k8s-resources");
        registry.clear();

        let lens: Vec<usize> = seen.lock().unwrap().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![2, 3, 3, 0]);
        assert_eq!(*seen.lock().unwrap(), *other.lock().unwrap());
    }

    #[test]
    fn test_teardown_publishes_empty_then_detaches() {
        let mut registry = TabRegistry::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = registry.subscribe(move |tabs: &[Tab]| sink.lock().unwrap().push(tabs.len()));

        registry.init("/app/1");
        registry.set_current_tab("log-analyzer");
        registry.clear();
        registry.unsubscribe(id);
        registry.init("/app/2");

        assert!(registry.current_tab().is_none());
        assert_eq!(*seen.lock().unwrap(), vec![2, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut registry = TabRegistry::default();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = seen.clone();
        let id = registry.subscribe(move |_| *sink.lock().unwrap() += 1);

        registry.init("/app/1");
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.init("/app/1");
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_distinct_adds_within_capacity() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        let names = ["a-000001", "b-000002", "a-000001", "c-000003", "b-000002"];
        for name in names {
            registry.add_tab("Pod", name, "/u");
            assert_eq!(selected_count(&registry), 1);
        }
        assert_eq!(registry.len(), 2 + 3);
    }

    #[test]
    fn test_only_capacity_hit_yields_notice() {
        let mut registry = TabRegistry::default();
        registry.init("/app/1");
        let config = registry.config().clone();

        let notices: Vec<String> = (0..6)
            .map(|i| registry.add_tab("Pod", &format!("pod-{}", i), &format!("/app/1/p/{}", i)))
            .filter_map(|outcome| outcome.notice(&config))
            .collect();
        assert_eq!(notices, vec!["Max 7 tabs allowed".to_string()]);

        assert_eq!(AddTabOutcome::Ignored.notice(&config), None);
        assert_eq!(AddTabOutcome::Reselected.notice(&config), None);
    }

    #[test]
    fn test_configured_cap() {
        let config = TabsConfig {
            max_tabs: 3,
            ..TabsConfig::default()
        };
        let mut registry = TabRegistry::new(config);
        registry.init("/app/1");
        assert_eq!(registry.add_tab("Pod", "a-000001", "/a"), AddTabOutcome::Added);
        assert_eq!(
            registry.add_tab("Pod", "b-000002", "/b"),
            AddTabOutcome::CapacityReached { max: 3 }
        );
        assert_eq!(registry.config().capacity_notice(), "Max 3 tabs allowed");
    }
}
