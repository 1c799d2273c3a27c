//! Report output (console summary and CSV export)

use anyhow::{Context, Result};
use csv::Writer;
use expense_core::format::{format_date, format_in_currency};
use expense_core::stats::amount_in_usd;
use expense_core::{CompanyDirectory, Dashboard, DataSource, Expense, Notifier, RateTable, StatsSource};
use std::path::Path;
use tracing::{error, info};

/// Routes dashboard notices to the log
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

fn source_label(dashboard: &Dashboard) -> &'static str {
    match (dashboard.expense_source, dashboard.stats_source) {
        (DataSource::Synthetic, _) | (_, StatsSource::Placeholder) => "demo data",
        (DataSource::Empty, StatsSource::Server) => "live (no expenses listed)",
        (DataSource::Empty, StatsSource::Derived) => "no expenses",
        (DataSource::Live, StatsSource::Server) => "live",
        (DataSource::Live, StatsSource::Derived) => "live (stats derived from expenses)",
    }
}

/// Summary body, one entry per console line
pub fn summary_lines(dashboard: &Dashboard, companies: &CompanyDirectory) -> Vec<String> {
    let mut lines = vec![format!("Source: {}", source_label(dashboard)), String::new()];

    lines.push("OVERVIEW:".to_string());
    for card in dashboard.stat_cards(None) {
        lines.push(format!("  {:<30}{:>14}", format!("{}:", card.title), card.value));
    }

    lines.push(String::new());
    lines.push("BY COMPANY:".to_string());
    for rollup in &dashboard.company_rollups {
        lines.push(format!(
            "  {:<24}{:>4} expenses  {:>18}",
            rollup.company.name,
            rollup.expense_count,
            format_in_currency(&rollup.company.currency, rollup.total_amount)
        ));
    }

    lines.push(String::new());
    lines.push("BY CATEGORY:".to_string());
    if dashboard.category_matrix.is_empty() {
        lines.push("  No data for chart".to_string());
    }
    for row in &dashboard.category_matrix {
        let parts: Vec<String> = row
            .amounts
            .iter()
            .map(|(company, amount)| format!("{} {:.2}", company, amount))
            .collect();
        lines.push(format!("  {:<18}{}", row.category, parts.join(", ")));
    }

    lines.push(String::new());
    lines.push("RECENT EXPENSES:".to_string());
    if dashboard.recent().is_empty() {
        lines.push("  No recent expenses".to_string());
    }
    for expense in dashboard.recent() {
        let company = companies.resolve(expense.company_id);
        lines.push(format!(
            "  {}  {:<28}{:<10}{:>16}",
            format_date(&expense.submitted_at),
            expense.title,
            expense.status,
            format_in_currency(&company.currency, expense.amount)
        ));
    }

    lines
}

pub fn print_summary(dashboard: &Dashboard, companies: &CompanyDirectory) {
    println!("\n============================================================");
    println!("                    EXPENSE DASHBOARD");
    println!("============================================================\n");

    for line in summary_lines(dashboard, companies) {
        println!("{}", line);
    }

    println!("============================================================");
}

/// Write the resolved expense list to CSV
pub fn write_expenses_csv(path: &Path, expenses: &[Expense], companies: &CompanyDirectory, rates: &RateTable) -> Result<()> {
    let mut wtr = Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;

    wtr.write_record([
        "Id",
        "Date",
        "Title",
        "Category",
        "Status",
        "Company",
        "Currency",
        "Amount",
        "Amount_USD",
    ])?;

    for expense in expenses {
        let company = companies.resolve(expense.company_id);
        wtr.write_record([
            expense.id.to_string().as_str(),
            &format_date(&expense.submitted_at),
            &expense.title,
            &expense.category,
            &expense.status.to_string(),
            &company.name,
            &company.currency,
            &format!("{:.2}", expense.amount),
            &format!("{:.2}", amount_in_usd(expense, companies, rates)),
        ])?;
    }

    wtr.flush()?;
    info!("Wrote {} expenses to {}", expenses.len(), path.display());
    Ok(())
}
