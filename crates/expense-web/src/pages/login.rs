//! Demo sign-in
//!
//! The API has no login endpoint yet, so the page offers the seeded
//! accounts and starts a session with a placeholder token.

use expense_core::layout::HOME_PATH;
use expense_core::{Role, Session, User};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use shared::CONFIG;

use crate::session::use_session;

const DEMO_TOKEN: &str = "demo";

fn demo_user(role: Role) -> User {
    let (id, email, full_name, manager_id) = match role {
        Role::Admin => (1, "admin@acme.com", "Admin User", None),
        Role::Manager => (2, "manager@acme.com", "John Manager", None),
        Role::Employee => (3, "alice@acme.com", "Alice Employee", Some(2)),
    };

    User {
        id,
        email: email.to_string(),
        full_name: Some(full_name.to_string()),
        role,
        company_id: 1,
        manager_id,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    if session.is_authenticated() {
        return view! { <Redirect path=HOME_PATH /> }.into_any();
    }

    let sign_in = move |role: Role| {
        session.sign_in(Session::new(demo_user(role), DEMO_TOKEN));
        navigate(HOME_PATH, Default::default());
    };

    view! {
        <main class="flex min-h-screen items-center justify-center bg-gray-50">
            <div class="w-full max-w-sm rounded-lg bg-white p-8 shadow">
                <h1 class="text-2xl font-bold text-gray-900">{CONFIG.name}</h1>
                <p class="mb-6 text-gray-500">{CONFIG.tagline}</p>
                <div class="space-y-2">
                    {[Role::Admin, Role::Manager, Role::Employee]
                        .into_iter()
                        .map(|role| {
                            let sign_in = sign_in.clone();
                            view! {
                                <button
                                    class="block w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700"
                                    on:click=move |_| sign_in(role)
                                >
                                    {format!("Sign in as {}", role)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
    .into_any()
}
