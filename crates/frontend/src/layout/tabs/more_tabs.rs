//! MoreTabs component - dropdown with the dynamic tabs that did not fit.
//!
//! Shown only in overflow mode. Each entry renders the two-line `Kind/name`
//! label and its own close button.

use crate::shared::icons::icon;
use contracts::shared::tabs::{Tab, TooltipLines};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn MoreTabs(
    #[prop(into)] tabs: Signal<Vec<Tab>>,
    #[prop(into)] on_select: Callback<Tab>,
    #[prop(into)] on_close: Callback<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    // Trigger shows the selected dynamic tab, if any
    let selected_label = move || {
        tabs.with(|tabs| {
            tabs.iter()
                .find(|t| t.is_selected)
                .map(|t| t.display_name.clone())
                .unwrap_or_default()
        })
    };

    let toggle_dropdown = move |_| {
        is_open.update(|open| *open = !*open);
    };

    view! {
        <div class="more-tabs-option">
            <button
                class="more-tabs-option__trigger"
                on:click=toggle_dropdown
                title="More tabs"
            >
                <span class="more-tabs-option__trigger-text">{selected_label}</span>
                {move || if is_open.get() {
                    icon("chevron-up")
                } else {
                    icon("chevron-down")
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="more-tabs-option__menu">
                    <For
                        each=move || tabs.get()
                        key=|tab| (tab.identifier.clone(), tab.is_selected)
                        children=move |tab: Tab| {
                            let lines = TooltipLines::from_title(&tab.full_title);
                            let identifier = tab.identifier.clone();
                            let is_selected = tab.is_selected;
                            view! {
                                <div
                                    class="more-tabs-option__item"
                                    class:more-tabs-option__item--active=is_selected
                                    on:click=move |_| {
                                        on_select.run(tab.clone());
                                        is_open.set(false);
                                    }
                                >
                                    <div class="more-tabs-option__label">
                                        <small class="more-tabs-option__kind">{lines.primary}</small>
                                        {lines.secondary.map(|name| view! {
                                            <div class="more-tabs-option__name">{name}</div>
                                        })}
                                    </div>
                                    <button
                                        class="more-tabs-option__close"
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.stop_propagation();
                                            on_close.run(identifier.clone());
                                        }
                                        title="Close"
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
