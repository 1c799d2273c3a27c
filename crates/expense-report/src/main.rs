//! ExesMan expense report
//!
//! Fetches the dashboard endpoints, applies the same fallback policy as the
//! web dashboard and prints the result. Optionally exports the resolved
//! expense list to CSV.

mod client;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use expense_core::{DashboardContext, FakeDataProvider, MockDataProvider, Notifier, load_dashboard};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use client::ApiClient;
use config::{Config, FileConfig, Overrides};
use report::TracingNotifier;

/// Default config file path
const CONFIG_FILE: &str = "config.toml";

/// Load the config file; only the default path may be absent
fn load_config_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        if path == Path::new(CONFIG_FILE) {
            debug!("No {} found, using built-in defaults", CONFIG_FILE);
            return Ok(FileConfig::default());
        }
        anyhow::bail!(
            "Config file '{}' not found.\n\n\
            Copy config.toml.example to get started.",
            path.display()
        );
    }

    FileConfig::load(path)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "expense_report=debug,expense_core=debug"
    } else {
        "expense_report=info,expense_core=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(name = "expense-report")]
#[command(about = "Console summary of the ExesMan expense dashboard")]
struct Args {
    /// Path to config.toml
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Substitute generated data when the API cannot be reached
    #[arg(long)]
    demo: bool,

    /// Number of expenses to request
    #[arg(long)]
    limit: Option<usize>,

    /// Write the resolved expense list to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = load_config_file(&args.config)?;
    let config = Config::from_file(
        &file_config,
        &Overrides {
            demo: args.demo,
            limit: args.limit,
        },
    )?;
    info!("Fetching dashboard from {}", config.api_base);

    let client = ApiClient::new(&config)?;
    let ctx = DashboardContext {
        companies: &config.companies,
        rates: &config.rates,
        expense_limit: config.expense_limit,
        recent_limit: config.recent_limit,
        viewer: None,
    };

    let mut mock = config
        .demo_data
        .then(|| MockDataProvider::from_config().with_batch(config.mock_count, config.days_back));
    let fake = mock.as_mut().map(|m| m as &mut dyn FakeDataProvider);

    let dashboard = load_dashboard(&client, &ctx, fake).await;

    let notifier = TracingNotifier;
    for notice in &dashboard.notices {
        notifier.notify(notice);
    }

    report::print_summary(&dashboard, &config.companies);

    if let Some(path) = &args.csv {
        report::write_expenses_csv(path, &dashboard.expenses, &config.companies, &config.rates)?;
    }

    Ok(())
}
