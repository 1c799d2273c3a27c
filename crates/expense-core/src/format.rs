//! Display formatting for amounts and dates

use chrono::{DateTime, Utc};

/// Insert thousands separators into a non-negative integer string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Two decimals with comma grouping: 1234.5 -> "1,234.50"
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), cents)
}

/// Card value for a USD total: "$1,234.50"
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

/// Amount in a company's own currency: "EUR 55.00"
pub fn format_in_currency(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, format_amount(amount))
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(155.0), "$155.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_in_currency() {
        assert_eq!(format_in_currency("EUR", 55.0), "EUR 55.00");
        assert_eq!(format_in_currency("JPY", 12345.678), "JPY 12,345.68");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_amount(-1500.0), "-1,500.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 3, 23, 59, 0).unwrap();
        assert_eq!(format_date(&ts), "2025-12-03");
    }
}
