//! Records exchanged with the expense API

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Tenant company with its own display currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    /// ISO 4217 code, e.g. "EUR"
    pub currency: String,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            currency: currency.into().to_uppercase(),
        }
    }
}

/// Expense review status
///
/// The API sends lowercase values, the dashboard uses capitalized ones;
/// both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "rejected")]
    Rejected,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 3] = [ExpenseStatus::Pending, ExpenseStatus::Approved, ExpenseStatus::Rejected];
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseStatus::Pending => write!(f, "Pending"),
            ExpenseStatus::Approved => write!(f, "Approved"),
            ExpenseStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A submitted expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    /// Amount in the owning company's currency
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    pub category: String,
    pub status: ExpenseStatus,
    pub company_id: i64,
    #[serde(deserialize_with = "de_timestamp")]
    pub submitted_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    /// Submitting user (absent on generated records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Manager responsible for approval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
    #[serde(default, deserialize_with = "de_optional_timestamp", skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        status: ExpenseStatus,
        company_id: i64,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            category: category.into(),
            status,
            company_id,
            submitted_at,
            description: None,
            receipt_url: None,
            user_id: None,
            manager_id: None,
            reviewed_at: None,
        }
    }
}

/// Summary figures shown on the dashboard cards
///
/// Amounts are in USD. `approved_count` and `rejected_count` are missing
/// from older API responses and default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_expenses: u64,
    pub pending_count: u64,
    #[serde(default)]
    pub approved_count: u64,
    #[serde(default)]
    pub rejected_count: u64,
    pub total_amount: f64,
    pub approved_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(alias = "admin")]
    Admin,
    #[serde(alias = "manager")]
    Manager,
    #[serde(alias = "employee")]
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub company_id: i64,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

/// Signed-in user plus the bearer token for API calls
///
/// Created at sign-in, dropped at logout. Passed explicitly to whatever
/// needs it rather than looked up globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// A session counts as authenticated only while it holds a token
pub fn is_authenticated(session: Option<&Session>) -> bool {
    session.is_some_and(|s| !s.token.is_empty())
}

// =============================================================================
// Wire format helpers
// =============================================================================

/// Decimal columns arrive either as JSON numbers or as strings ("12.50")
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(f64),
    Text(String),
}

fn de_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    use serde::de::Error;

    let amount = match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(n) => n,
        AmountRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount: {s:?}")))?,
    };

    if !amount.is_finite() || amount < 0.0 {
        return Err(D::Error::custom(format!("amount must be a non-negative number, got {amount}")));
    }
    Ok(amount)
}

/// RFC 3339 timestamps, or naive ones (SQLite drops the offset) read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn de_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw:?}")))
}

fn de_optional_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw:?}"))),
    }
}
