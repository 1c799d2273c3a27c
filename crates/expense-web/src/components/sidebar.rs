use expense_core::layout::{SidebarState, nav_items_for};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use shared::CONFIG;

use crate::session::use_session;

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let state = move || SidebarState {
        collapsed: collapsed.get(),
    };
    let toggle = move |_| {
        let mut next = state();
        next.toggle();
        collapsed.set(next.collapsed);
    };

    let items = move || {
        session
            .user()
            .map(|user| nav_items_for(user.role))
            .unwrap_or_default()
    };

    view! {
        <aside
            class="flex flex-col bg-gray-900 text-white transition-all duration-200"
            style=move || format!("width: {}px", state().width_px())
        >
            <div class="flex items-center justify-between px-4 py-5">
                <Show when=move || !collapsed.get()>
                    <span class="text-xl font-bold">{CONFIG.name}</span>
                </Show>
                <button class="p-1 rounded hover:bg-gray-800" on:click=toggle>
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="flex-1 space-y-1 px-2">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| {
                            let active = pathname.get() == item.href;
                            let class = if active {
                                "block rounded-md px-3 py-2 bg-gray-800 text-white"
                            } else {
                                "block rounded-md px-3 py-2 text-gray-300 hover:bg-gray-800"
                            };
                            let label = if collapsed.get() {
                                item.name.chars().take(1).collect::<String>()
                            } else {
                                item.name.to_string()
                            };
                            view! {
                                <A href=item.href attr:class=class>{label}</A>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
