//! Configuration for the expense report CLI

use anyhow::{Context, Result};
use expense_core::{Company, CompanyDirectory, RateTable};
use serde::Deserialize;
use shared::CONFIG;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from config.toml; every section is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    /// Replaces the built-in directory when non-empty
    pub companies: Vec<CompanyConfig>,
    /// Added on top of the built-in rates
    pub rates: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: CONFIG.api_base.to_string(),
            token: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub expense_limit: usize,
    pub recent_limit: usize,
    pub demo_data: bool,
    pub mock_count: usize,
    pub days_back: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            expense_limit: CONFIG.dashboard.expense_limit,
            recent_limit: CONFIG.dashboard.recent_limit,
            demo_data: false,
            mock_count: CONFIG.demo.expense_count,
            days_back: CONFIG.demo.days_back,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    pub id: i64,
    pub name: String,
    pub currency: String,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| {
            "Failed to parse config.toml. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Incorrect data types (strings vs numbers)\n\n\
             See config.toml.example for the expected format."
        })
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Command-line values that take precedence over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub demo: bool,
    pub limit: Option<usize>,
}

/// Main configuration struct with resolved values
pub struct Config {
    /// API base URL, without trailing slash
    pub api_base: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub expense_limit: usize,
    pub recent_limit: usize,
    pub demo_data: bool,
    pub mock_count: usize,
    pub days_back: u32,
    pub companies: CompanyDirectory,
    pub rates: RateTable,
}

impl Config {
    pub fn from_file(file_config: &FileConfig, overrides: &Overrides) -> Result<Self> {
        let companies = if file_config.companies.is_empty() {
            CompanyDirectory::builtin().context("Built-in company directory is invalid")?
        } else {
            CompanyDirectory::new(
                file_config
                    .companies
                    .iter()
                    .map(|c| Company::new(c.id, c.name.as_str(), c.currency.as_str()))
                    .collect(),
            )
            .context("Invalid [[companies]] section")?
        };

        let rates = file_config
            .rates
            .iter()
            .fold(RateTable::builtin(), |table, (currency, to_usd)| table.with_rate(currency, *to_usd));

        let api = &file_config.api;
        let dashboard = &file_config.dashboard;
        anyhow::ensure!(
            api.timeout_secs > 0,
            "Invalid [api] timeout_secs: must be at least 1 second"
        );

        Ok(Self {
            api_base: api.base_url.trim_end_matches('/').to_string(),
            // An empty token in the file means "no token"
            token: api.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(api.timeout_secs),
            expense_limit: overrides.limit.unwrap_or(dashboard.expense_limit),
            recent_limit: dashboard.recent_limit,
            demo_data: overrides.demo || dashboard.demo_data,
            mock_count: dashboard.mock_count,
            days_back: dashboard.days_back,
            companies,
            rates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_builtin_defaults() {
        let file: FileConfig = toml::from_str("").unwrap();
        let config = Config::from_file(&file, &Overrides::default()).unwrap();

        assert_eq!(config.api_base, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.expense_limit, 50);
        assert_eq!(config.recent_limit, 5);
        assert!(!config.demo_data);
        assert!(config.token.is_none());
        assert_eq!(config.companies.len(), 5);
        assert_eq!(config.rates.rate("GBP"), 1.25);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file: FileConfig = toml::from_str(
            r#"
            [dashboard]
            expense_limit = 20
            demo_data = false
            "#,
        )
        .unwrap();
        let overrides = Overrides {
            demo: true,
            limit: Some(7),
        };
        let config = Config::from_file(&file, &overrides).unwrap();

        assert_eq!(config.expense_limit, 7);
        assert!(config.demo_data);
    }

    #[test]
    fn test_companies_and_rates_sections() {
        let file: FileConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://expenses.example.com/api/"
            token = "secret"

            [[companies]]
            id = 10
            name = "Northwind"
            currency = "chf"

            [rates]
            CHF = 1.12
            "#,
        )
        .unwrap();
        let config = Config::from_file(&file, &Overrides::default()).unwrap();

        assert_eq!(config.api_base, "https://expenses.example.com/api");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.companies.len(), 1);
        assert_eq!(config.companies.currency_of(10), "CHF");
        assert_eq!(config.rates.rate("CHF"), 1.12);
        assert_eq!(config.rates.rate("EUR"), 1.1);
    }

    #[test]
    fn test_duplicate_company_ids_rejected() {
        let file: FileConfig = toml::from_str(
            r#"
            [[companies]]
            id = 1
            name = "A"
            currency = "USD"

            [[companies]]
            id = 1
            name = "B"
            currency = "EUR"
            "#,
        )
        .unwrap();

        assert!(Config::from_file(&file, &Overrides::default()).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file: FileConfig = toml::from_str("[api]\ntimeout_secs = 0").unwrap();

        let err = Config::from_file(&file, &Overrides::default()).err().unwrap();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 3\ntoken = \"\"").unwrap();

        let loaded = FileConfig::load(file.path()).unwrap();
        let config = Config::from_file(&loaded, &Overrides::default()).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = 1").unwrap();

        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config.toml"));
    }
}
