//! Month/year argument parsing

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse `MM/YYYY` into the first instant of that month in UTC
pub fn parse_month_year(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(&format!("01/{}", input.trim()), "%d/%m/%Y")
        .with_context(|| format!("Invalid date '{}', expected MM/YYYY", input))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date '{}'", input))?;
    Ok(midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_month_year() {
        let parsed = parse_month_year("07/2023").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(parse_month_year(" 1/2024 ").unwrap().format("%Y-%m").to_string(), "2024-01");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_month_year("13/2023").is_err());
        assert!(parse_month_year("2023-07").is_err());
        assert!(parse_month_year("").is_err());
    }
}
