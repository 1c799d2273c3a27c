//! Core logic for the ExesMan expense dashboard
//!
//! Pure data in, view model out: the web app and the report CLI supply the
//! fetched records and render whatever [`dashboard::Dashboard`] comes back.

pub mod access;
pub mod currency;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod layout;
pub mod mock;
pub mod model;
pub mod notify;
pub mod outcome;
pub mod stats;

pub use currency::{CompanyDirectory, RateTable};
pub use dashboard::{
    Dashboard, DashboardContext, DataSource, ExpenseSource, StatCard, StatsSource, build_dashboard, load_dashboard,
};
pub use error::{CoreError, FetchError};
pub use mock::{FakeDataProvider, MockDataProvider};
pub use model::{Company, DashboardStats, Expense, ExpenseStatus, Role, Session, User};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use outcome::FetchOutcome;
pub use stats::{CategoryRow, CompanyRollup, build_category_company_matrix, compute_stats, group_by_company};
