//! DynamicTabs - tab strip of an app-details view.
//!
//! - Fixed tabs are rendered first and never collapse
//! - The section's width is the reference for the available space
//! - When dynamic tabs do not fit, they move into the `MoreTabs` dropdown
//! - Re-measured on mount, on window resize and after every tab-list change

use super::measure::StripRefs;
use super::more_tabs::MoreTabs;
use super::store::use_tabs_store;
use super::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::tabs::{
    dynamic_container_style, Tab as TabData, TabsData, FIXED_CONTAINER_STYLE, SECTION_STYLE,
    TABS_LIST_STYLE,
};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DynamicTabs() -> impl IntoView {
    let store = use_tabs_store();
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = store.config();
    let reserved_width = config.more_button_width;
    let fallback_fixed_width = config.fallback_fixed_width;
    let close_delay_ms = config.close_navigation_delay_ms;
    let show_delay_ms = config.tooltip_show_delay_ms;
    let hide_delay_ms = config.tooltip_hide_delay_ms;

    let refs = StripRefs::new();
    // Not overflowing until the first measurement completes
    let is_overflowing = RwSignal::new(false);
    let fixed_width = RwSignal::new(None::<f64>);

    let tabs_data = Memo::new(move |_| store.tabs.with(|tabs| TabsData::partition(tabs)));
    let dynamic_tabs = Signal::derive(move || tabs_data.with(|d| d.dynamic_tabs.clone()));

    let measure = move || {
        let Some(metrics) = refs.measure(reserved_width) else {
            return;
        };
        fixed_width.set(Some(metrics.fixed_width));
        let overflowing = metrics.is_overflowing();
        if overflowing != is_overflowing.get_untracked() {
            log!(
                "📐 tabs overflow={} (section={:?}, fixed={}, dynamic={})",
                overflowing,
                metrics.section_width,
                metrics.fixed_width,
                metrics.dynamic_width
            );
            is_overflowing.set(overflowing);
        }
    };

    let resize_handle = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize_handle.remove());

    // Re-measure once the DOM reflects the new tab list
    Effect::new(move |_| {
        let has_tabs = tabs_data.with(|d| !d.is_empty());
        if has_tabs {
            request_animation_frame(move || measure());
        }
    });

    let on_select = Callback::new(move |tab: TabData| {
        store.activate_tab(&tab.identifier);
        ctx.navigate(&tab.target_url);
    });

    let on_close = Callback::new(move |identifier: String| {
        let Some(url) = store.remove_tab(&identifier) else {
            return;
        };
        // Let the click finish propagating before the route changes
        spawn_local(async move {
            TimeoutFuture::new(close_delay_ms).await;
            ctx.navigate(&url);
        });
    });

    let render_tab = move |tab: TabData| {
        view! {
            <TabComponent
                tab=tab
                on_select=on_select
                on_close=on_close
                tooltip_show_delay_ms=show_delay_ms
                tooltip_hide_delay_ms=hide_delay_ms
            />
        }
    };

    view! {
        <div node_ref=refs.section class="dynamic-tabs-section" style=SECTION_STYLE>
            <div node_ref=refs.fixed class="fixed-tabs-container" style=FIXED_CONTAINER_STYLE>
                <ul class="fixed-tabs-wrapper" style=TABS_LIST_STYLE>
                    <For
                        each=move || tabs_data.with(|d| d.fixed_tabs.clone())
                        key=|tab| (tab.identifier.clone(), tab.is_selected)
                        children=render_tab
                    />
                </ul>
            </div>
            <div
                class="dynamic-tabs-container"
                class:dynamic-tabs-container--collapsed=move || is_overflowing.get()
                style=move || {
                    dynamic_container_style(
                        fixed_width.get(),
                        fallback_fixed_width,
                        is_overflowing.get(),
                    )
                }
            >
                <ul node_ref=refs.dynamic class="dynamic-tabs-wrapper" style=TABS_LIST_STYLE>
                    <For
                        each=move || dynamic_tabs.get()
                        key=|tab| (tab.identifier.clone(), tab.is_selected)
                        children=render_tab
                    />
                </ul>
            </div>
            <Show when=move || is_overflowing.get()>
                <MoreTabs tabs=dynamic_tabs on_select=on_select on_close=on_close />
            </Show>
        </div>
    }
}
