use expense_core::CompanyRollup;
use expense_core::format::format_in_currency;
use leptos::prelude::*;

/// Per-company expense count and total in the company's own currency
#[component]
pub fn CompanyCards(rollups: Vec<CompanyRollup>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-5">
            {rollups
                .into_iter()
                .map(|rollup| {
                    view! {
                        <div class="rounded-lg border bg-white p-4">
                            <div class="font-medium text-gray-900">{rollup.company.name.clone()}</div>
                            <div class="text-xs text-gray-400">{rollup.company.currency.clone()}</div>
                            <div class="mt-2 text-sm text-gray-600">
                                {rollup.expense_count} " expenses"
                            </div>
                            <div class="text-lg font-semibold">
                                {format_in_currency(&rollup.company.currency, rollup.total_amount)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
