use expense_core::StatCard;
use expense_core::dashboard::StatKind;
use leptos::prelude::*;

fn accent(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Pending => "border-yellow-400",
        StatKind::ApprovedAmount => "border-green-500",
        StatKind::TotalExpenses => "border-blue-500",
        StatKind::TotalAmount => "border-indigo-500",
    }
}

#[component]
pub fn StatCards(cards: Vec<StatCard>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <div class=format!("rounded-lg border-l-4 bg-white p-5 shadow {}", accent(card.kind))>
                            <div class="text-sm text-gray-500">{card.title}</div>
                            <div class="mt-1 text-2xl font-semibold text-gray-900">{card.value}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
