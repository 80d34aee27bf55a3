//! AppDetailsPage - app-details screen with its dynamic tab strip.
//!
//! The page owns the view's [`TabsStore`]: it is created on mount, reset when
//! the app changes and detached on unmount. Route changes drive the store the
//! same way tab clicks do.

use super::route::{
    capacity_fallback, first_tab_url, parse_app_details_path, route_action, AppDetailsRoute,
    RouteAction,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{provide_tabs_store, DynamicTabs, TabsStore};
use crate::shared::config::load_tabs_config;
use contracts::shared::tabs::AddTabOutcome;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn AppDetailsPage() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = provide_tabs_store(load_tabs_config());
    let current_base = StoredValue::new(None::<String>);

    log!("🔨 AppDetailsPage CREATED");
    on_cleanup(move || {
        log!("💥 AppDetailsPage DESTROYED");
        store.dispose();
    });

    Effect::new(move |_| {
        let path = ctx.location.get();
        let Some(route) = parse_app_details_path(&path) else {
            return;
        };
        if current_base.get_value().as_deref() != Some(route.base_url.as_str()) {
            store.init(&route.base_url);
            current_base.set_value(Some(route.base_url.clone()));
        }
        apply_route(store, ctx, &route);
    });

    let selected_title = move || {
        store.tabs.with(|tabs| {
            tabs.iter()
                .find(|t| t.is_selected)
                .map(|t| t.full_title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="app-details">
            <DynamicTabs />
            <div class="app-details__content" data-tab=selected_title>
                <h3 class="app-details__title">{selected_title}</h3>
            </div>
        </div>
    }
}

/// Syncs the store with the current route.
fn apply_route(store: TabsStore, ctx: AppGlobalContext, route: &AppDetailsRoute) {
    let config = store.config();
    let Some(action) = route_action(route, &config, |identifier| store.contains(identifier))
    else {
        return;
    };

    match action {
        RouteAction::Redirect(url) => ctx.redirect(&url),
        RouteAction::SelectTab(segment) => {
            if !store.set_current_tab(&segment) {
                log!("⚠️ Unknown app-details section: {}", segment);
                if let Some(url) = first_tab_url(&route.base_url, &config) {
                    ctx.redirect(&url);
                }
            }
        }
        RouteAction::ActivateResource(identifier) => {
            store.activate_tab(&identifier);
        }
        RouteAction::OpenResource { kind, name, url } => {
            if let AddTabOutcome::CapacityReached { .. } = store.add_tab(&kind, &name, &url) {
                if let Some(url) = capacity_fallback(&store.snapshot()) {
                    ctx.redirect(&url);
                }
            }
        }
    }
}
