//! Synthetic expenses and placeholder figures for demo mode
//!
//! Nothing in here runs unless the caller hands a [`FakeDataProvider`] to the
//! dashboard pipeline, which only happens when demo data is switched on in
//! configuration.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::CONFIG;

use crate::currency::CompanyDirectory;
use crate::model::{Company, DashboardStats, Expense, ExpenseStatus};

/// Categories cycled through by position
pub const CATEGORIES: [&str; 5] = ["Travel", "Food", "Office Supplies", "Entertainment", "Software"];

/// Generated amounts fall in `[MIN_AMOUNT, MAX_AMOUNT)`
pub const MIN_AMOUNT: u32 = 20;
pub const MAX_AMOUNT: u32 = 520;

/// Source of stand-in data for when the live API is unreachable
pub trait FakeDataProvider {
    /// A batch of synthetic expenses for the given directory
    fn expenses(&mut self, companies: &CompanyDirectory) -> Vec<Expense>;

    /// Replace zero fields of `derived` with placeholders
    fn fill_stats(&mut self, derived: &DashboardStats) -> DashboardStats;
}

/// Random expense generator with an injectable RNG and clock
pub struct MockDataProvider<R: Rng> {
    rng: R,
    now: DateTime<Utc>,
    count: usize,
    days_back: u32,
}

impl MockDataProvider<StdRng> {
    /// Entropy-seeded generator using the demo settings from `shared::CONFIG`
    pub fn from_config() -> Self {
        Self::new(StdRng::from_entropy(), Utc::now()).with_batch(CONFIG.demo.expense_count, CONFIG.demo.days_back)
    }
}

impl<R: Rng> MockDataProvider<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self {
            rng,
            now,
            count: CONFIG.demo.expense_count,
            days_back: CONFIG.demo.days_back,
        }
    }

    /// Batch size and date window used by [`FakeDataProvider::expenses`]
    pub fn with_batch(mut self, count: usize, days_back: u32) -> Self {
        self.count = count;
        self.days_back = days_back;
        self
    }

    /// `count` synthetic expenses, most recent first
    ///
    /// Companies are assigned round-robin so every company gets an even
    /// share; with no companies the records point at id 0 (unknown).
    pub fn generate_expenses(&mut self, count: usize, companies: &[Company], days_back: u32) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = (0..count)
            .map(|i| {
                let id = i as i64 + 1;
                let company_id = if companies.is_empty() {
                    0
                } else {
                    companies[i % companies.len()].id
                };
                let status = ExpenseStatus::ALL[self.rng.gen_range(0..ExpenseStatus::ALL.len())];
                let amount = f64::from(self.rng.gen_range(MIN_AMOUNT..MAX_AMOUNT));

                Expense::new(
                    id,
                    format!("Expense #{id}"),
                    amount,
                    CATEGORIES[i % CATEGORIES.len()],
                    status,
                    company_id,
                    self.random_date(days_back),
                )
            })
            .collect();

        expenses.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        expenses
    }

    /// Now minus a whole number of days in `[0, days_back)`
    fn random_date(&mut self, days_back: u32) -> DateTime<Utc> {
        if days_back == 0 {
            return self.now;
        }
        self.now - Duration::days(i64::from(self.rng.gen_range(0..days_back)))
    }

    /// Per-field fill: keep non-zero values, replace zeros with placeholders
    ///
    /// Ranges: pending 1-5, approved amount 500-3500, total expenses 5-25,
    /// total amount 1000-6000.
    pub fn fallback_stats(&mut self, real: &DashboardStats) -> DashboardStats {
        DashboardStats {
            pending_count: nonzero_or(real.pending_count, || self.rng.gen_range(1..=5)),
            approved_amount: nonzero_amount_or(real.approved_amount, || {
                f64::from(self.rng.gen_range(500..3500_u32))
            }),
            total_expenses: nonzero_or(real.total_expenses, || self.rng.gen_range(5..25)),
            total_amount: nonzero_amount_or(real.total_amount, || f64::from(self.rng.gen_range(1000..6000_u32))),
            approved_count: real.approved_count,
            rejected_count: real.rejected_count,
        }
    }
}

fn nonzero_or(value: u64, placeholder: impl FnOnce() -> u64) -> u64 {
    if value == 0 { placeholder() } else { value }
}

fn nonzero_amount_or(value: f64, placeholder: impl FnOnce() -> f64) -> f64 {
    if value == 0.0 { placeholder() } else { value }
}

impl<R: Rng> FakeDataProvider for MockDataProvider<R> {
    fn expenses(&mut self, companies: &CompanyDirectory) -> Vec<Expense> {
        let (count, days_back) = (self.count, self.days_back);
        self.generate_expenses(count, companies.as_slice(), days_back)
    }

    fn fill_stats(&mut self, derived: &DashboardStats) -> DashboardStats {
        self.fallback_stats(derived)
    }
}
