use crate::layout::global_context::AppGlobalContext;
use crate::layout::{NoticeHost, NoticeService};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext (location + navigation) to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide NoticeService for transient notices
    provide_context(NoticeService::new());

    view! {
        <AppRoutes />
        <NoticeHost />
    }
}
