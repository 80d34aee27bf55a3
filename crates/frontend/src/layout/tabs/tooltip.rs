use contracts::shared::tabs::TooltipLines;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Hover tooltip with the full `Kind/name` title of a dynamic tab.
///
/// Appears after `show_delay_ms` of hovering and hides after `hide_delay_ms`.
/// A generation counter drops timers that belong to an earlier hover.
#[component]
pub fn TabTooltip(
    title: String,
    show_delay_ms: u32,
    hide_delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let lines = TooltipLines::from_title(&title);
    let visible = RwSignal::new(false);
    let generation = RwSignal::new(0u64);

    let schedule = move |show: bool, delay_ms: u32| {
        let current = generation.get_untracked() + 1;
        generation.set(current);
        if delay_ms == 0 {
            visible.set(show);
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.try_get_untracked() == Some(current) {
                visible.set(show);
            }
        });
    };

    view! {
        <div
            class="tab-tooltip__anchor"
            on:mouseenter=move |_| schedule(true, show_delay_ms)
            on:mouseleave=move |_| schedule(false, hide_delay_ms)
        >
            {children()}
            <Show when=move || visible.get()>
                <div class="tab-tooltip" role="tooltip">
                    <h2 class="tab-tooltip__primary">{lines.primary.clone()}</h2>
                    {lines
                        .secondary
                        .clone()
                        .map(|name| view! { <p class="tab-tooltip__secondary">{name}</p> })}
                </div>
            </Show>
        </div>
    }
}
