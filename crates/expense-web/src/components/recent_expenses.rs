use expense_core::format::{format_date, format_in_currency};
use expense_core::{CompanyDirectory, Expense, ExpenseStatus};
use leptos::prelude::*;

fn badge(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::Pending => "bg-yellow-100 text-yellow-800",
        ExpenseStatus::Approved => "bg-green-100 text-green-800",
        ExpenseStatus::Rejected => "bg-red-100 text-red-800",
    }
}

#[component]
pub fn RecentExpenses(expenses: Vec<Expense>, companies: CompanyDirectory) -> impl IntoView {
    if expenses.is_empty() {
        return view! { <div class="py-8 text-center text-gray-500">"No recent expenses"</div> }.into_any();
    }

    view! {
        <ul class="divide-y">
            {expenses
                .into_iter()
                .map(|expense| {
                    let company = companies.resolve(expense.company_id);
                    view! {
                        <li class="flex items-center justify-between py-3">
                            <div>
                                <div class="font-medium text-gray-900">{expense.title.clone()}</div>
                                <div class="text-sm text-gray-500">
                                    {company.name.clone()} " · " {expense.category.clone()} " · "
                                    {format_date(&expense.submitted_at)}
                                </div>
                            </div>
                            <div class="text-right">
                                <div class="font-semibold">
                                    {format_in_currency(&company.currency, expense.amount)}
                                </div>
                                <span class=format!("rounded-full px-2 py-0.5 text-xs {}", badge(expense.status))>
                                    {expense.status.to_string()}
                                </span>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
