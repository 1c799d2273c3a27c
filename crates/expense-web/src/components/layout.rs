use expense_core::layout::LOGIN_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{Header, Sidebar};
use crate::session::use_session;

/// Authenticated shell: sidebar, header, page body
///
/// Without a session nothing is rendered and the user is sent to the
/// login page.
#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let collapsed = RwSignal::new(false);

    Effect::new(move |_| {
        if !session.is_authenticated() {
            navigate(LOGIN_PATH, Default::default());
        }
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! {
                <div class="flex h-screen items-center justify-center text-gray-500">"Loading..."</div>
            }
        >
            <div class="flex h-screen bg-gray-50">
                <Sidebar collapsed=collapsed />
                <div class="flex flex-1 flex-col overflow-hidden">
                    <Header />
                    <main class="flex-1 overflow-y-auto p-6">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
