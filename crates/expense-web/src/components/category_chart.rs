//! Stacked bars: one row per category, one segment per company
//!
//! Segments use raw amounts in each company's currency, not USD.

use expense_core::CategoryRow;
use leptos::prelude::*;

const PALETTE: [&str; 5] = ["#6366f1", "#10b981", "#f59e0b", "#ef4444", "#0ea5e9"];

fn color(series: &[String], company: &str) -> &'static str {
    let pos = series.iter().position(|name| name == company).unwrap_or(series.len());
    PALETTE[pos % PALETTE.len()]
}

#[component]
pub fn CategoryChart(rows: Vec<CategoryRow>, series: Vec<String>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <div class="py-8 text-center text-gray-500">"No data for chart"</div> }.into_any();
    }

    let max = rows.iter().map(CategoryRow::total).fold(0.0_f64, f64::max);

    view! {
        <div class="space-y-3">
            {rows
                .into_iter()
                .map(|row| {
                    let segments = row
                        .amounts
                        .iter()
                        .map(|(company, amount)| {
                            let width = if max > 0.0 { amount / max * 100.0 } else { 0.0 };
                            view! {
                                <div
                                    class="h-full"
                                    title=format!("{}: {:.2}", company, amount)
                                    style=format!("width: {:.2}%; background: {}", width, color(&series, company))
                                ></div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="flex items-center gap-3">
                            <div class="w-32 shrink-0 text-sm text-gray-600">{row.category.clone()}</div>
                            <div class="flex h-5 flex-1 overflow-hidden rounded bg-gray-100">{segments}</div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="flex flex-wrap gap-4 pt-2 text-xs text-gray-600">
                {series
                    .iter()
                    .map(|company| {
                        view! {
                            <span class="flex items-center gap-1">
                                <span
                                    class="inline-block h-3 w-3 rounded-sm"
                                    style=format!("background: {}", color(&series, company))
                                ></span>
                                {company.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
