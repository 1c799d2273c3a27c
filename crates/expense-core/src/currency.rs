//! Company directory and static exchange rates

use std::collections::HashMap;

use shared::CONFIG;

use crate::error::CoreError;
use crate::model::Company;

/// Currency assumed for anything we cannot resolve
pub const BASE_CURRENCY: &str = "USD";

/// Display name for expenses whose company is not in the directory
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Known companies in a stable display order, indexed by id
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
    index: HashMap<i64, usize>,
    unknown: Company,
}

impl CompanyDirectory {
    /// Build a directory, rejecting duplicate ids
    pub fn new(companies: Vec<Company>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(companies.len());
        for (pos, company) in companies.iter().enumerate() {
            if index.insert(company.id, pos).is_some() {
                return Err(CoreError::DuplicateCompany(company.id));
            }
        }

        Ok(Self {
            companies,
            index,
            unknown: Company::new(0, UNKNOWN_COMPANY, BASE_CURRENCY),
        })
    }

    /// The compiled-in directory from `shared::CONFIG`
    pub fn builtin() -> Result<Self, CoreError> {
        Self::new(
            CONFIG
                .companies
                .iter()
                .map(|c| Company::new(c.id, c.name, c.currency))
                .collect(),
        )
    }

    pub fn get(&self, id: i64) -> Option<&Company> {
        self.index.get(&id).map(|&pos| &self.companies[pos])
    }

    /// Like [`get`](Self::get), falling back to "Unknown Company" in USD
    pub fn resolve(&self, id: i64) -> &Company {
        self.get(id).unwrap_or(&self.unknown)
    }

    pub fn currency_of(&self, id: i64) -> &str {
        &self.resolve(id).currency
    }

    pub fn as_slice(&self) -> &[Company] {
        &self.companies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl Default for CompanyDirectory {
    /// An empty directory; every expense resolves to "Unknown Company"
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            index: HashMap::new(),
            unknown: Company::new(0, UNKNOWN_COMPANY, BASE_CURRENCY),
        }
    }
}

/// Multipliers from a currency into USD
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in placeholder rates from `shared::CONFIG`
    pub fn builtin() -> Self {
        CONFIG
            .rates
            .iter()
            .fold(Self::new(), |table, r| table.with_rate(r.currency, r.to_usd))
    }

    pub fn with_rate(mut self, currency: &str, to_usd: f64) -> Self {
        self.set_rate(currency, to_usd);
        self
    }

    pub fn set_rate(&mut self, currency: &str, to_usd: f64) {
        self.rates.insert(currency.to_uppercase(), to_usd);
    }

    /// Multiplier for `currency`; unknown codes count as already-USD
    pub fn rate(&self, currency: &str) -> f64 {
        self.rates
            .get(currency)
            .or_else(|| self.rates.get(&currency.to_uppercase()))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn to_usd(&self, amount: f64, currency: &str) -> f64 {
        amount * self.rate(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_rejects_duplicate_ids() {
        let result = CompanyDirectory::new(vec![Company::new(1, "A", "USD"), Company::new(1, "B", "EUR")]);
        assert_eq!(result.unwrap_err(), CoreError::DuplicateCompany(1));
    }

    #[test]
    fn test_unknown_company_resolves_to_usd() {
        let directory = CompanyDirectory::new(vec![Company::new(2, "TechStart Inc", "eur")]).unwrap();

        assert_eq!(directory.currency_of(2), "EUR");
        assert_eq!(directory.resolve(99).name, UNKNOWN_COMPANY);
        assert_eq!(directory.currency_of(99), "USD");
    }

    #[test]
    fn test_builtin_directory_order() {
        let directory = CompanyDirectory::builtin().unwrap();
        let names: Vec<&str> = directory.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(directory.len(), 5);
        assert_eq!(names[0], "Acme Corporation");
        assert_eq!(names[4], "BlueSky Innovations");
    }

    #[test]
    fn test_rates_default_to_one() {
        let rates = RateTable::builtin();

        assert_eq!(rates.rate("EUR"), 1.1);
        assert_eq!(rates.rate("gbp"), 1.25);
        assert_eq!(rates.rate("CHF"), 1.0);
        assert!((rates.to_usd(50.0, "EUR") - 55.0).abs() < 1e-9);
    }
}
