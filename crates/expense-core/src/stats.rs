//! Aggregation of expense records into dashboard figures

use std::collections::HashMap;

use crate::currency::{CompanyDirectory, RateTable};
use crate::model::{Company, DashboardStats, Expense, ExpenseStatus};

/// Amount converted into USD via the owning company's currency
pub fn amount_in_usd(expense: &Expense, companies: &CompanyDirectory, rates: &RateTable) -> f64 {
    rates.to_usd(expense.amount, companies.currency_of(expense.company_id))
}

/// Reduce an expense list to the card figures
///
/// An empty list gives all zeros; whether that means "nothing submitted" or
/// "nothing fetched" is for the caller to decide.
pub fn compute_stats(expenses: &[Expense], companies: &CompanyDirectory, rates: &RateTable) -> DashboardStats {
    expenses.iter().fold(DashboardStats::default(), |mut stats, expense| {
        let usd = amount_in_usd(expense, companies, rates);

        stats.total_expenses += 1;
        stats.total_amount += usd;
        match expense.status {
            ExpenseStatus::Pending => stats.pending_count += 1,
            ExpenseStatus::Approved => {
                stats.approved_count += 1;
                stats.approved_amount += usd;
            }
            ExpenseStatus::Rejected => stats.rejected_count += 1,
        }
        stats
    })
}

/// Per-company expense count and total, in the company's own currency
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRollup {
    pub company: Company,
    pub expense_count: usize,
    pub total_amount: f64,
}

/// One rollup per directory entry, in directory order, including idle companies
pub fn group_by_company(expenses: &[Expense], companies: &CompanyDirectory) -> Vec<CompanyRollup> {
    companies
        .iter()
        .map(|company| {
            let (expense_count, total_amount) = expenses
                .iter()
                .filter(|e| e.company_id == company.id)
                .fold((0, 0.0), |(count, sum), e| (count + 1, sum + e.amount));

            CompanyRollup {
                company: company.clone(),
                expense_count,
                total_amount,
            }
        })
        .collect()
}

/// One chart row: raw amounts per company for a single category
///
/// Only companies with at least one expense in the category are present.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    /// (company name, summed raw amount) in first-seen order
    pub amounts: Vec<(String, f64)>,
}

impl CategoryRow {
    pub fn get(&self, company: &str) -> Option<f64> {
        self.amounts.iter().find(|(name, _)| name == company).map(|(_, amount)| *amount)
    }

    /// Height of the stacked bar
    pub fn total(&self) -> f64 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }

    fn add(&mut self, company: &str, amount: f64) {
        match self.amounts.iter_mut().find(|(name, _)| name == company) {
            Some((_, total)) => *total += amount,
            None => self.amounts.push((company.to_string(), amount)),
        }
    }
}

/// Category × company matrix for the stacked bar chart
///
/// Rows follow the order categories first appear in `expenses`. Amounts are
/// not converted; each stack segment is labelled with its company.
pub fn build_category_company_matrix(expenses: &[Expense], companies: &CompanyDirectory) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let pos = *positions.entry(expense.category.as_str()).or_insert_with(|| {
            rows.push(CategoryRow {
                category: expense.category.clone(),
                amounts: Vec::new(),
            });
            rows.len() - 1
        });

        let company = companies.resolve(expense.company_id);
        rows[pos].add(&company.name, expense.amount);
    }

    rows
}

/// Series keys for the chart legend, in directory order
pub fn chart_series(companies: &CompanyDirectory) -> Vec<String> {
    companies.iter().map(|c| c.name.clone()).collect()
}
