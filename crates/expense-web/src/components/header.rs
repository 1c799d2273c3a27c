use expense_core::Notifier;
use expense_core::layout::{breadcrumbs, display_name, initials};
use expense_core::notify::LOGGED_OUT;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::session::use_session;
use crate::toast::use_toasts;

/// Breadcrumb trail plus the user menu
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // DashboardLayout sends us to the login page once the session is gone
    let logout = move |_| {
        menu_open.set(false);
        session.logout();
        toasts.success(LOGGED_OUT);
    };

    view! {
        <header class="flex items-center justify-between border-b bg-white px-6 py-4">
            <nav class="flex items-center space-x-2 text-sm text-gray-500">
                {move || {
                    let crumbs = breadcrumbs(&pathname.get());
                    let last = crumbs.len() - 1;
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            view! {
                                {(i > 0).then(|| view! { <span>"/"</span> })}
                                {if i == last {
                                    view! { <span class="font-medium text-gray-900">{crumb.name}</span> }.into_any()
                                } else {
                                    view! { <A href=crumb.href>{crumb.name}</A> }.into_any()
                                }}
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <div class="relative">
                <button
                    class="flex h-9 w-9 items-center justify-center rounded-full bg-indigo-600 text-sm font-semibold text-white"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || initials(session.user().as_ref())}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="absolute right-0 mt-2 w-56 rounded-md border bg-white py-2 shadow-lg">
                        <div class="px-4 py-2 text-sm">
                            <div class="font-medium text-gray-900">
                                {move || display_name(session.user().as_ref()).to_string()}
                            </div>
                            <div class="text-gray-500">
                                {move || session.user().map(|u| u.email).unwrap_or_default()}
                            </div>
                            <div class="text-xs text-gray-400">
                                {move || session.user().map(|u| u.role.to_string()).unwrap_or_default()}
                            </div>
                        </div>
                        <button
                            class="block w-full px-4 py-2 text-left text-sm text-red-600 hover:bg-gray-50"
                            on:click=logout
                        >
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
