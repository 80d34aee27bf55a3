//! Transient user notices (e.g. "Max 7 tabs allowed").

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub message: String,
}

/// Сервис для показа временных уведомлений.
///
/// Each notice removes itself after `duration_ms`.
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn error(&self, message: impl Into<String>, duration_ms: u32) {
        let message = message.into();
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        log::info!("notice #{}: {}", id, message);
        self.notices.update(|n| n.push(Notice { id, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| n.retain(|notice| notice.id != id));
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active notices in the top-right corner.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        <div class="notice-host">
            <For
                each=move || svc.notices()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice-host__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=MessageBarIntent::Error>
                                <span>{notice.message}</span>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
