use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DashboardPage, LoginPage};
use crate::session::SessionContext;
use crate::toast::{Toaster, Toasts};

#[component]
pub fn App() -> impl IntoView {
    // Session and toasts are injected here and read through context below
    provide_context(SessionContext::load());
    provide_context(Toasts::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/login") view=LoginPage />
            </Routes>
        </Router>
        <Toaster />
    }
}
