use leptos::prelude::*;

/// Titled card wrapping one dashboard panel
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="bg-white rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">{title}</h2>
            {children()}
        </section>
    }
}
