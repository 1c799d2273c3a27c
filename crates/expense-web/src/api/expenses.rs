use expense_core::{DashboardStats, Expense, ExpenseSource, FetchError};
use shared::CONFIG;

use super::http::get_json;

/// The expense API as seen from the browser
pub struct HttpExpenseSource {
    base: &'static str,
    bearer: Option<String>,
}

impl HttpExpenseSource {
    pub fn new(bearer: Option<String>) -> Self {
        Self {
            base: CONFIG.api_base,
            bearer,
        }
    }
}

impl ExpenseSource for HttpExpenseSource {
    async fn fetch_stats(&self) -> Result<Option<DashboardStats>, FetchError> {
        get_json(&format!("{}/expenses/stats", self.base), self.bearer.as_deref()).await
    }

    async fn fetch_expenses(&self, limit: usize) -> Result<Vec<Expense>, FetchError> {
        get_json(&format!("{}/expenses?limit={}", self.base, limit), self.bearer.as_deref()).await
    }
}
