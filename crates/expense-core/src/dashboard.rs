//! Dashboard assembly: fetch, resolve fallbacks, aggregate
//!
//! Stats and expenses are requested together and settle independently. A
//! failure on one side never blocks the other:
//! - failed stats are derived from whatever expense list was resolved, and
//!   only padded with placeholders when that list is synthetic
//! - failed expenses become synthetic data, if a fake provider was supplied
//! - an empty-but-successful answer stays empty

use shared::CONFIG;
use tracing::{debug, warn};

use crate::access::visible_expenses;
use crate::currency::{CompanyDirectory, RateTable};
use crate::error::FetchError;
use crate::format::format_usd;
use crate::layout::pending_card_title;
use crate::mock::FakeDataProvider;
use crate::model::{DashboardStats, Expense, Role, User};
use crate::notify::{LOAD_FAILED, Notice};
use crate::outcome::FetchOutcome;
use crate::stats::{CategoryRow, CompanyRollup, build_category_company_matrix, compute_stats, group_by_company};

/// The two endpoints the dashboard reads
///
/// Implemented over `gloo-net` in the browser and `reqwest` in the CLI.
#[allow(async_fn_in_trait)]
pub trait ExpenseSource {
    /// `GET /expenses/stats`; `Ok(None)` for a `null` body
    async fn fetch_stats(&self) -> Result<Option<DashboardStats>, FetchError>;

    /// `GET /expenses?limit=N`
    async fn fetch_expenses(&self, limit: usize) -> Result<Vec<Expense>, FetchError>;
}

/// Reference data and limits for one dashboard build
pub struct DashboardContext<'a> {
    pub companies: &'a CompanyDirectory,
    pub rates: &'a RateTable,
    pub expense_limit: usize,
    pub recent_limit: usize,
    /// Signed-in user; live lists are narrowed to what they may see
    pub viewer: Option<&'a User>,
}

impl<'a> DashboardContext<'a> {
    pub fn new(companies: &'a CompanyDirectory, rates: &'a RateTable) -> Self {
        Self {
            companies,
            rates,
            expense_limit: CONFIG.dashboard.expense_limit,
            recent_limit: CONFIG.dashboard.recent_limit,
            viewer: None,
        }
    }

    pub fn with_viewer(mut self, viewer: Option<&'a User>) -> Self {
        self.viewer = viewer;
        self
    }
}

/// Where the expense list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    /// The API answered with nothing
    Empty,
    /// Generated because the fetch failed
    Synthetic,
}

/// Where the card figures came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    /// `/expenses/stats` answered
    Server,
    /// Computed from the resolved expense list
    Derived,
    /// Derived from synthetic expenses, zero fields replaced by placeholders
    Placeholder,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub stats_source: StatsSource,
    /// Resolved list, most recent first when synthetic
    pub expenses: Vec<Expense>,
    pub expense_source: DataSource,
    /// Company cards and chart cover [`recent`](Self::recent) only
    pub company_rollups: Vec<CompanyRollup>,
    pub category_matrix: Vec<CategoryRow>,
    pub notices: Vec<Notice>,
    recent_limit: usize,
}

/// One summary card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub kind: StatKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Pending,
    ApprovedAmount,
    TotalExpenses,
    TotalAmount,
}

impl Dashboard {
    /// The first few expenses for the "Recent Expenses" list
    pub fn recent(&self) -> &[Expense] {
        &self.expenses[..self.expenses.len().min(self.recent_limit)]
    }

    /// True when anything on screen is generated rather than fetched
    pub fn is_demo(&self) -> bool {
        self.expense_source == DataSource::Synthetic || self.stats_source == StatsSource::Placeholder
    }

    /// The four summary cards, titled for the viewer's role
    pub fn stat_cards(&self, role: Option<Role>) -> Vec<StatCard> {
        vec![
            StatCard {
                title: pending_card_title(role),
                value: self.stats.pending_count.to_string(),
                kind: StatKind::Pending,
            },
            StatCard {
                title: "Approved Amount (USD)",
                value: format_usd(self.stats.approved_amount),
                kind: StatKind::ApprovedAmount,
            },
            StatCard {
                title: "Total Expenses",
                value: self.stats.total_expenses.to_string(),
                kind: StatKind::TotalExpenses,
            },
            StatCard {
                title: "Total Amount (USD)",
                value: format_usd(self.stats.total_amount),
                kind: StatKind::TotalAmount,
            },
        ]
    }
}

/// Fetch both endpoints concurrently and build the dashboard
pub async fn load_dashboard<S: ExpenseSource>(
    source: &S,
    ctx: &DashboardContext<'_>,
    fake: Option<&mut dyn FakeDataProvider>,
) -> Dashboard {
    let (stats, expenses) = futures::join!(source.fetch_stats(), source.fetch_expenses(ctx.expense_limit));

    build_dashboard(FetchOutcome::from_optional(stats), FetchOutcome::from_list(expenses), ctx, fake)
}

/// Resolve fallbacks and aggregate
///
/// `fake` is only consulted for outcomes that actually failed.
pub fn build_dashboard(
    stats: FetchOutcome<DashboardStats>,
    expenses: FetchOutcome<Vec<Expense>>,
    ctx: &DashboardContext<'_>,
    mut fake: Option<&mut dyn FakeDataProvider>,
) -> Dashboard {
    let mut notices = Vec::new();
    if stats.is_failed() || expenses.is_failed() {
        notices.push(Notice::error(LOAD_FAILED));
    }

    let (expenses, expense_source) = match expenses {
        FetchOutcome::Success(list) => {
            let list = match ctx.viewer {
                Some(viewer) => visible_expenses(viewer, list),
                None => list,
            };
            (list, DataSource::Live)
        }
        FetchOutcome::EmptyOk => {
            debug!("expense list is empty");
            (Vec::new(), DataSource::Empty)
        }
        FetchOutcome::Failed(err) => {
            warn!("expense fetch failed: {err}");
            match fake.as_deref_mut() {
                Some(provider) => {
                    let generated = provider.expenses(ctx.companies);
                    debug!(count = generated.len(), "substituting demo expenses");
                    (generated, DataSource::Synthetic)
                }
                None => (Vec::new(), DataSource::Empty),
            }
        }
    };

    let (stats, stats_source) = match stats {
        FetchOutcome::Success(server) => (server, StatsSource::Server),
        FetchOutcome::EmptyOk => (compute_stats(&expenses, ctx.companies, ctx.rates), StatsSource::Derived),
        FetchOutcome::Failed(err) => {
            warn!("stats fetch failed: {err}");
            let derived = compute_stats(&expenses, ctx.companies, ctx.rates);
            // Zeros derived from a live or empty list are real
            match fake.as_deref_mut() {
                Some(provider) if expense_source == DataSource::Synthetic => {
                    (provider.fill_stats(&derived), StatsSource::Placeholder)
                }
                _ => (derived, StatsSource::Derived),
            }
        }
    };

    let recent = &expenses[..expenses.len().min(ctx.recent_limit)];

    Dashboard {
        company_rollups: group_by_company(recent, ctx.companies),
        category_matrix: build_category_company_matrix(recent, ctx.companies),
        stats,
        stats_source,
        expenses,
        expense_source,
        notices,
        recent_limit: ctx.recent_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDataProvider;
    use crate::model::{Company, ExpenseStatus};
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn directory() -> CompanyDirectory {
        CompanyDirectory::new(vec![Company::new(1, "Acme Corporation", "USD"), Company::new(2, "TechStart Inc", "EUR")])
            .unwrap()
    }

    fn rates() -> RateTable {
        RateTable::new().with_rate("EUR", 1.1)
    }

    fn mock() -> MockDataProvider<StdRng> {
        let now = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();
        MockDataProvider::new(StdRng::seed_from_u64(11), now).with_batch(15, 30)
    }

    fn live_expenses() -> Vec<Expense> {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        vec![
            Expense::new(1, "Flight", 100.0, "Travel", ExpenseStatus::Approved, 1, at),
            Expense::new(2, "Dinner", 50.0, "Food", ExpenseStatus::Pending, 2, at),
        ]
    }

    struct StubSource {
        stats: Result<Option<DashboardStats>, FetchError>,
        expenses: Result<Vec<Expense>, FetchError>,
    }

    impl ExpenseSource for StubSource {
        async fn fetch_stats(&self) -> Result<Option<DashboardStats>, FetchError> {
            self.stats.clone()
        }

        async fn fetch_expenses(&self, limit: usize) -> Result<Vec<Expense>, FetchError> {
            self.expenses.clone().map(|list| list.into_iter().take(limit).collect())
        }
    }

    #[test]
    fn test_live_data_passes_through() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let server = DashboardStats {
            total_expenses: 40,
            pending_count: 4,
            approved_count: 30,
            rejected_count: 6,
            total_amount: 9000.0,
            approved_amount: 7000.0,
        };
        let mut fake = mock();

        let dashboard = build_dashboard(
            FetchOutcome::Success(server.clone()),
            FetchOutcome::Success(live_expenses()),
            &ctx,
            Some(&mut fake),
        );

        assert_eq!(dashboard.stats, server);
        assert_eq!(dashboard.stats_source, StatsSource::Server);
        assert_eq!(dashboard.expense_source, DataSource::Live);
        assert_eq!(dashboard.expenses.len(), 2);
        assert!(dashboard.notices.is_empty());
        assert!(!dashboard.is_demo());
    }

    #[test]
    fn test_failed_stats_are_derived_from_expenses() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);

        let dashboard = build_dashboard(
            FetchOutcome::Failed(FetchError::Status(500)),
            FetchOutcome::Success(live_expenses()),
            &ctx,
            None,
        );

        assert_eq!(dashboard.stats_source, StatsSource::Derived);
        assert_eq!(dashboard.stats.total_expenses, 2);
        assert_eq!(dashboard.stats.pending_count, 1);
        assert!((dashboard.stats.total_amount - 155.0).abs() < 1e-9);
        assert_eq!(dashboard.notices, vec![Notice::error(LOAD_FAILED)]);
    }

    #[test]
    fn test_empty_success_is_never_replaced() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let mut fake = mock();

        let dashboard = build_dashboard(FetchOutcome::EmptyOk, FetchOutcome::EmptyOk, &ctx, Some(&mut fake));

        assert_eq!(dashboard.expense_source, DataSource::Empty);
        assert!(dashboard.expenses.is_empty());
        assert_eq!(dashboard.stats, DashboardStats::default());
        assert_eq!(dashboard.stats_source, StatsSource::Derived);
        assert!(dashboard.notices.is_empty());
        // every company still gets a rollup row
        assert_eq!(dashboard.company_rollups.len(), 2);
        assert!(dashboard.category_matrix.is_empty());
    }

    #[test]
    fn test_failed_expenses_use_demo_data() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let mut fake = mock();

        let dashboard = build_dashboard(
            FetchOutcome::Failed(FetchError::Transport("offline".into())),
            FetchOutcome::Failed(FetchError::Transport("offline".into())),
            &ctx,
            Some(&mut fake),
        );

        assert_eq!(dashboard.expense_source, DataSource::Synthetic);
        assert_eq!(dashboard.expenses.len(), 15);
        assert_eq!(dashboard.recent().len(), 5);
        assert_eq!(dashboard.stats_source, StatsSource::Placeholder);
        assert_eq!(dashboard.stats.total_expenses, 15);
        // one notice for the whole cycle
        assert_eq!(dashboard.notices.len(), 1);
        assert!(dashboard.is_demo());

        // rollups cover the recent list only
        let rollup_total: usize = dashboard.company_rollups.iter().map(|r| r.expense_count).sum();
        assert_eq!(rollup_total, 5);
    }

    #[test]
    fn test_failed_stats_keep_real_zeros_from_live_list() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let list = vec![Expense::new(1, "Flight", 100.0, "Travel", ExpenseStatus::Approved, 1, at)];
        let mut fake = mock();

        let dashboard = build_dashboard(
            FetchOutcome::Failed(FetchError::Status(500)),
            FetchOutcome::Success(list),
            &ctx,
            Some(&mut fake),
        );

        assert_eq!(dashboard.stats_source, StatsSource::Derived);
        assert_eq!(dashboard.stats.total_expenses, 1);
        assert_eq!(dashboard.stats.pending_count, 0);
        assert_eq!(dashboard.stats.approved_count, 1);
        assert!(!dashboard.is_demo());
    }

    #[test]
    fn test_failed_stats_with_empty_list_stay_zero() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let mut fake = mock();

        let dashboard = build_dashboard(
            FetchOutcome::Failed(FetchError::Status(500)),
            FetchOutcome::EmptyOk,
            &ctx,
            Some(&mut fake),
        );

        assert_eq!(dashboard.expense_source, DataSource::Empty);
        assert_eq!(dashboard.stats_source, StatsSource::Derived);
        assert_eq!(dashboard.stats, DashboardStats::default());
        assert_eq!(dashboard.notices.len(), 1);
    }

    #[test]
    fn test_rollups_and_chart_use_recent_list() {
        let (companies, rates) = (directory(), rates());
        let mut ctx = DashboardContext::new(&companies, &rates);
        ctx.recent_limit = 1;

        let dashboard = build_dashboard(FetchOutcome::EmptyOk, FetchOutcome::Success(live_expenses()), &ctx, None);

        assert_eq!(dashboard.stats.total_expenses, 2);
        assert_eq!(dashboard.company_rollups[0].expense_count, 1);
        assert_eq!(dashboard.company_rollups[1].expense_count, 0);
        assert_eq!(dashboard.category_matrix.len(), 1);
        assert_eq!(dashboard.category_matrix[0].category, "Travel");
    }

    #[test]
    fn test_failed_expenses_without_demo_stay_empty() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);

        let dashboard = build_dashboard(
            FetchOutcome::EmptyOk,
            FetchOutcome::Failed(FetchError::Status(503)),
            &ctx,
            None,
        );

        assert_eq!(dashboard.expense_source, DataSource::Empty);
        assert!(dashboard.expenses.is_empty());
        assert_eq!(dashboard.stats, DashboardStats::default());
        assert_eq!(dashboard.notices.len(), 1);
    }

    #[test]
    fn test_viewer_narrows_live_list() {
        let (companies, rates) = (directory(), rates());
        let employee = User {
            id: 3,
            email: "employee@acme.com".into(),
            full_name: Some("Jane Employee".into()),
            role: Role::Employee,
            company_id: 1,
            manager_id: Some(2),
        };
        let ctx = DashboardContext::new(&companies, &rates).with_viewer(Some(&employee));

        let mut list = live_expenses();
        list[0].user_id = Some(3);
        list[1].user_id = Some(8);

        let dashboard = build_dashboard(FetchOutcome::EmptyOk, FetchOutcome::Success(list), &ctx, None);
        assert_eq!(dashboard.expenses.len(), 1);
        assert_eq!(dashboard.expenses[0].id, 1);
    }

    #[test]
    fn test_stat_cards() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let dashboard = build_dashboard(FetchOutcome::EmptyOk, FetchOutcome::Success(live_expenses()), &ctx, None);

        let cards = dashboard.stat_cards(Some(Role::Employee));
        assert_eq!(cards[0].title, "My Pending Expenses");
        assert_eq!(cards[0].value, "1");
        assert_eq!(cards[1].value, "$100.00");
        assert_eq!(cards[2].value, "2");
        assert_eq!(cards[3].value, "$155.00");
    }

    #[test]
    fn test_load_dashboard_settles_each_fetch() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let source = StubSource {
            stats: Err(FetchError::Decode("bad json".into())),
            expenses: Ok(live_expenses()),
        };

        let dashboard = futures::executor::block_on(load_dashboard(&source, &ctx, None));

        assert_eq!(dashboard.expense_source, DataSource::Live);
        assert_eq!(dashboard.stats_source, StatsSource::Derived);
        assert_eq!(dashboard.stats.total_expenses, 2);
        assert_eq!(dashboard.notices.len(), 1);
    }

    #[test]
    fn test_load_dashboard_empty_list_is_empty_ok() {
        let (companies, rates) = (directory(), rates());
        let ctx = DashboardContext::new(&companies, &rates);
        let source = StubSource {
            stats: Ok(None),
            expenses: Ok(Vec::new()),
        };
        let mut fake = mock();

        let dashboard = futures::executor::block_on(load_dashboard(&source, &ctx, Some(&mut fake)));

        assert_eq!(dashboard.expense_source, DataSource::Empty);
        assert!(dashboard.notices.is_empty());
    }
}
