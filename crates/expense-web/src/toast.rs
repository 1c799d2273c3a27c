//! Toast notifications

use expense_core::{Notice, NoticeLevel, Notifier};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Toast queue, provided once by `App`
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, notice }));

        let items = self.items;
        Timeout::new(DISMISS_AFTER_MS, move || {
            items.update(|items| items.retain(|t| t.id != id));
        })
        .forget();
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.push(Notice::success(message));
    }

    fn error(&self, message: &str) {
        self.push(Notice::error(message));
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            <For each=move || toasts.items.get() key=|toast| toast.id let:toast>
                <div class=match toast.notice.level {
                    NoticeLevel::Success => "px-4 py-2 rounded-lg shadow bg-green-600 text-white",
                    NoticeLevel::Error => "px-4 py-2 rounded-lg shadow bg-red-600 text-white",
                }>
                    {toast.notice.message.clone()}
                </div>
            </For>
        </div>
    }
}
