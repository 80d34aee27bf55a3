use crate::app_details::route::parse_app_details_path;
use crate::app_details::AppDetailsPage;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
// Router components are not used: the app has a single screen keyed by path

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="placeholder">{"Not implemented yet"}</div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // Keyed by app id so switching apps remounts the page and its tab store
    let app_id = Memo::new(move |_| {
        ctx.location
            .with(|path| parse_app_details_path(path).map(|route| route.app_id))
    });

    view! {
        {move || match app_id.get() {
            Some(_) => view! { <AppDetailsPage /> }.into_any(),
            None => view! { <NotFound /> }.into_any(),
        }}
    }
}
