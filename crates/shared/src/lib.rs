//! Static dashboard configuration
//!
//! Everything here is fixed at compile time. The web dashboard reads it
//! directly; the report CLI uses it as defaults under its `config.toml`.

/// Static application configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Base URL of the expense API (no trailing slash)
    pub api_base: &'static str,

    pub dashboard: Dashboard,
    pub demo: Demo,

    /// Company directory, in display order
    pub companies: &'static [CompanyEntry],
    /// Multipliers to USD, keyed by ISO currency code
    pub rates: &'static [RateEntry],
    pub navigation: &'static [NavEntry],
}

pub struct Dashboard {
    /// `limit` sent with `GET /expenses`
    pub expense_limit: usize,
    /// How many expenses the "Recent Expenses" list shows
    pub recent_limit: usize,
}

/// Synthetic data used when the API is unreachable
pub struct Demo {
    /// Substitute generated expenses when a fetch fails.
    /// Never applies to successful-but-empty responses.
    pub enabled: bool,
    pub expense_count: usize,
    pub days_back: u32,
}

pub struct CompanyEntry {
    pub id: i64,
    pub name: &'static str,
    pub currency: &'static str,
}

pub struct RateEntry {
    pub currency: &'static str,
    pub to_usd: f64,
}

pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
    /// Role names allowed to see the entry ("Admin", "Manager", "Employee")
    pub roles: &'static [&'static str],
}

pub static CONFIG: Config = Config {
    name: "ExesMan",
    tagline: "Manage your expenses and approvals",

    api_base: "http://localhost:8000/api",

    dashboard: Dashboard {
        expense_limit: 50,
        recent_limit: 5,
    },

    demo: Demo {
        enabled: true,
        expense_count: 15,
        days_back: 30,
    },

    companies: &[
        CompanyEntry {
            id: 1,
            name: "Acme Corporation",
            currency: "USD",
        },
        CompanyEntry {
            id: 2,
            name: "TechStart Inc",
            currency: "EUR",
        },
        CompanyEntry {
            id: 3,
            name: "Global Ventures",
            currency: "INR",
        },
        CompanyEntry {
            id: 4,
            name: "NextGen Solutions",
            currency: "GBP",
        },
        CompanyEntry {
            id: 5,
            name: "BlueSky Innovations",
            currency: "JPY",
        },
    ],

    // Placeholder rates, not market data
    rates: &[
        RateEntry {
            currency: "USD",
            to_usd: 1.0,
        },
        RateEntry {
            currency: "EUR",
            to_usd: 1.1,
        },
        RateEntry {
            currency: "GBP",
            to_usd: 1.25,
        },
        RateEntry {
            currency: "JPY",
            to_usd: 0.0067,
        },
        RateEntry {
            currency: "INR",
            to_usd: 0.012,
        },
    ],

    navigation: &[NavEntry {
        name: "Dashboard",
        href: "/dashboard",
        roles: &["Admin", "Manager", "Employee"],
    }],
};
