//! Expense API client over reqwest

use anyhow::{Context, Result};
use expense_core::{DashboardStats, Expense, ExpenseSource, FetchError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;

pub struct ApiClient {
    client: Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: config.api_base.clone(),
            token: config.token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base, path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl ExpenseSource for ApiClient {
    async fn fetch_stats(&self) -> Result<Option<DashboardStats>, FetchError> {
        self.get_json("/expenses/stats").await
    }

    async fn fetch_expenses(&self, limit: usize) -> Result<Vec<Expense>, FetchError> {
        self.get_json(&format!("/expenses?limit={}", limit)).await
    }
}
