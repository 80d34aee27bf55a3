//! Path parsing for `/app/{app_id}/...` and what a route means for the tab store.

use contracts::shared::tabs::{resource_identifier, Tab, TabsConfig};

/// Section that hosts resource tabs.
pub const RESOURCES_SEGMENT: &str = "k8s-resources";

const APP_PREFIX: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppDetailsSection {
    /// `/app/{id}` without a section; redirected to the first default tab.
    Overview,
    /// `/app/{id}/{segment}`, one of the fixed tabs.
    Tab(String),
    /// `/app/{id}/k8s-resources/{kind}/{name}`
    Resource { kind: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDetailsRoute {
    pub app_id: String,
    /// `/app/{id}`, base of every tab url.
    pub base_url: String,
    pub section: AppDetailsSection,
}

/// Parses an app-details path; `None` for anything outside `/app/{id}`.
pub fn parse_app_details_path(path: &str) -> Option<AppDetailsRoute> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let (prefix, app_id, rest) = match segments.as_slice() {
        [prefix, app_id, rest @ ..] => (*prefix, *app_id, rest),
        _ => return None,
    };
    if prefix != APP_PREFIX {
        return None;
    }

    let section = match rest {
        [] => AppDetailsSection::Overview,
        [section, kind, name, ..] if *section == RESOURCES_SEGMENT => {
            AppDetailsSection::Resource {
                kind: decode(kind),
                name: decode(name),
            }
        }
        [section, ..] => AppDetailsSection::Tab(decode(section)),
    };

    Some(AppDetailsRoute {
        app_id: app_id.to_string(),
        base_url: format!("/{}/{}", APP_PREFIX, app_id),
        section,
    })
}

/// Url of a resource tab under `base_url`.
pub fn resource_url(base_url: &str, kind: &str, name: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        RESOURCES_SEGMENT,
        urlencoding::encode(kind),
        urlencoding::encode(name)
    )
}

/// Store change a route asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    Redirect(String),
    /// Select the fixed tab; on failure fall back to [`first_tab_url`].
    SelectTab(String),
    /// The resource tab is already open.
    ActivateResource(String),
    /// Open a new resource tab; at capacity redirect to [`capacity_fallback`].
    OpenResource {
        kind: String,
        name: String,
        url: String,
    },
}

/// Url of the first default tab under `base_url`.
pub fn first_tab_url(base_url: &str, config: &TabsConfig) -> Option<String> {
    config
        .default_tabs
        .first()
        .map(|segment| format!("{}/{}", base_url.trim_end_matches('/'), segment))
}

/// Decides how the store follows `route`. `is_open` answers whether a tab
/// identifier is currently open.
pub fn route_action(
    route: &AppDetailsRoute,
    config: &TabsConfig,
    is_open: impl Fn(&str) -> bool,
) -> Option<RouteAction> {
    match &route.section {
        AppDetailsSection::Overview => {
            first_tab_url(&route.base_url, config).map(RouteAction::Redirect)
        }
        AppDetailsSection::Tab(segment) => Some(RouteAction::SelectTab(segment.clone())),
        AppDetailsSection::Resource { kind, name } => {
            let identifier = resource_identifier(kind, name, config.name_suffix_len);
            if is_open(&identifier) {
                return Some(RouteAction::ActivateResource(identifier));
            }
            Some(RouteAction::OpenResource {
                kind: kind.clone(),
                name: name.clone(),
                url: resource_url(&route.base_url, kind, name),
            })
        }
    }
}

/// Where to go when a resource url could not be opened: stay on the
/// selected tab.
pub fn capacity_fallback(tabs: &[Tab]) -> Option<String> {
    tabs.iter()
        .find(|t| t.is_selected)
        .map(|t| t.target_url.clone())
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::tabs::{AddTabOutcome, TabRegistry};

    #[test]
    fn test_overview() {
        let route = parse_app_details_path("/app/1").unwrap();
        assert_eq!(route.app_id, "1");
        assert_eq!(route.base_url, "/app/1");
        assert_eq!(route.section, AppDetailsSection::Overview);
    }

    #[test]
    fn test_fixed_tab_sections() {
        let route = parse_app_details_path("/app/42/log-analyzer/").unwrap();
        assert_eq!(route.section, AppDetailsSection::Tab("log-analyzer".into()));
        let route = parse_app_details_path("/app/42/k8s-resources?x=1").unwrap();
        assert_eq!(route.section, AppDetailsSection::Tab("k8s-resources".into()));
    }

    #[test]
    fn test_resource_section() {
        let route = parse_app_details_path("/app/1/k8s-resources/Pod/my-pod-abcdef").unwrap();
        assert_eq!(
            route.section,
            AppDetailsSection::Resource {
                kind: "Pod".into(),
                name: "my-pod-abcdef".into()
            }
        );
    }

    #[test]
    fn test_outside_app_details() {
        assert_eq!(parse_app_details_path("/"), None);
        assert_eq!(parse_app_details_path("/app"), None);
        assert_eq!(parse_app_details_path("/global-config/auth/1"), None);
    }

    fn registry_at(path: &str) -> (TabRegistry, AppDetailsRoute) {
        let route = parse_app_details_path(path).unwrap();
        let mut registry = TabRegistry::default();
        registry.init(&route.base_url);
        (registry, route)
    }

    #[test]
    fn test_overview_redirects_to_first_tab() {
        let (registry, route) = registry_at("/app/7");
        let action = route_action(&route, registry.config(), |id| registry.contains(id));
        assert_eq!(action, Some(RouteAction::Redirect("/app/7/k8s-resources".into())));

        let config = TabsConfig {
            default_tabs: Vec::new(),
            ..TabsConfig::default()
        };
        assert_eq!(route_action(&route, &config, |_| false), None);
    }

    #[test]
    fn test_fixed_section_selects_tab() {
        let (registry, route) = registry_at("/app/7/log-analyzer");
        let action = route_action(&route, registry.config(), |id| registry.contains(id));
        assert_eq!(action, Some(RouteAction::SelectTab("log-analyzer".into())));
        assert_eq!(
            first_tab_url(&route.base_url, registry.config()).as_deref(),
            Some("/app/7/k8s-resources")
        );
    }

    #[test]
    fn test_open_resource_is_activated() {
        let (mut registry, route) = registry_at("/app/7/k8s-resources/Pod/my-pod-abcdef");
        registry.add_tab("Pod", "my-pod-abcdef", "/app/7/k8s-resources/Pod/my-pod-abcdef");
        registry.activate_tab("k8s-resources");

        let action = route_action(&route, registry.config(), |id| registry.contains(id));
        assert_eq!(action, Some(RouteAction::ActivateResource("pod/...abcdef".into())));
    }

    #[test]
    fn test_new_resource_opens_with_canonical_url() {
        let (registry, route) = registry_at("/app/7/k8s-resources/Pod/my%20pod?tail=100");
        let action = route_action(&route, registry.config(), |id| registry.contains(id));
        assert_eq!(
            action,
            Some(RouteAction::OpenResource {
                kind: "Pod".into(),
                name: "my pod".into(),
                url: "/app/7/k8s-resources/Pod/my%20pod".into(),
            })
        );
    }

    #[test]
    fn test_capacity_hit_redirects_back_to_selected_tab() {
        let (mut registry, route) = registry_at("/app/7/k8s-resources/Pod/one-too-many");
        for i in 0..5 {
            let name = format!("pod-{}", i);
            registry.add_tab("Pod", &name, &resource_url("/app/7", "Pod", &name));
        }
        registry.activate_tab("pod/...pod-2");

        let Some(RouteAction::OpenResource { kind, name, url }) =
            route_action(&route, registry.config(), |id| registry.contains(id))
        else {
            panic!("expected a new resource tab");
        };
        let outcome = registry.add_tab(&kind, &name, &url);
        assert_eq!(outcome, AddTabOutcome::CapacityReached { max: 7 });
        assert_eq!(
            capacity_fallback(registry.tabs()).as_deref(),
            Some("/app/7/k8s-resources/Pod/pod-2")
        );
        assert_eq!(capacity_fallback(&[]), None);
    }

    #[test]
    fn test_resource_url_round_trip() {
        let url = resource_url("/app/1/", "Pod", "name with space");
        assert_eq!(url, "/app/1/k8s-resources/Pod/name%20with%20space");
        let route = parse_app_details_path(&url).unwrap();
        assert_eq!(
            route.section,
            AppDetailsSection::Resource {
                kind: "Pod".into(),
                name: "name with space".into()
            }
        );
    }
}
