use super::tooltip::TabTooltip;
use crate::shared::icons::icon;
use contracts::shared::tabs::Tab as TabData;
use leptos::ev;
use leptos::prelude::*;

/// One tab of the strip.
///
/// Fixed tabs have neither a tooltip nor a close button. `on_select` receives
/// the tab, `on_close` the tab identifier.
#[component]
pub fn Tab(
    tab: TabData,
    #[prop(into)] on_select: Callback<TabData>,
    #[prop(into)] on_close: Callback<String>,
    tooltip_show_delay_ms: u32,
    tooltip_hide_delay_ms: u32,
) -> impl IntoView {
    let is_fixed = tab.is_fixed;
    let href = tab.target_url.clone();

    let tab_for_click = tab.clone();
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        on_select.run(tab_for_click.clone());
    };

    let identifier = tab.identifier.clone();
    let on_close_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        on_close.run(identifier.clone());
    };

    let body = view! {
        <div
            class="dynamic-tab__body"
            class:dynamic-tab__body--selected=tab.is_selected
        >
            <a
                href=href
                class="dynamic-tab__resource"
                data-selected=tab.is_selected.to_string()
                on:click=on_click
            >
                <span class="dynamic-tab__name">{tab.display_name.clone()}</span>
            </a>
            {(!is_fixed).then(|| view! {
                <button class="dynamic-tab__close" title="Close" on:click=on_close_click>
                    {icon("x")}
                </button>
            })}
        </div>
    };

    let body = if is_fixed {
        body.into_any()
    } else {
        view! {
            <TabTooltip
                title=tab.full_title.clone()
                show_delay_ms=tooltip_show_delay_ms
                hide_delay_ms=tooltip_hide_delay_ms
            >
                {body}
            </TabTooltip>
        }
        .into_any()
    };

    view! {
        <li
            class=if is_fixed { "fixed-tab" } else { "dynamic-tab" }
            class:dynamic-tab__item-selected=tab.is_selected
            id=tab.display_name.clone()
        >
            {body}
        </li>
    }
}
