//! Fixed tax bracket table
//!
//! Longer holding periods pay a lower percentage on realized gains. Holding
//! days are approximated as `periods * 30`.

use serde::Serialize;

use crate::periods::DAYS_PER_PERIOD;

/// One band of the regressive table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    /// Inclusive upper bound on holding days; `None` for the open-ended band
    pub max_days: Option<i64>,
    /// Tax percentage applied to the gain (22.5 means 22.5%)
    pub percent: f64,
}

impl TaxBracket {
    /// Whether a holding of `days` falls into this band
    pub fn contains(&self, days: i64) -> bool {
        self.max_days.map_or(true, |max| days <= max)
    }
}

/// Brackets ordered from shortest to longest holding period
pub static TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket { max_days: Some(180), percent: 22.5 },
    TaxBracket { max_days: Some(360), percent: 20.0 },
    TaxBracket { max_days: Some(720), percent: 17.5 },
    TaxBracket { max_days: None, percent: 15.0 },
];

/// Select the bracket for a holding of `elapsed_periods`
///
/// Negative periods (evaluation before purchase) fall into the first band.
pub fn bracket_for(elapsed_periods: i64) -> &'static TaxBracket {
    let days = elapsed_periods.saturating_mul(DAYS_PER_PERIOD);
    TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.contains(days))
        .unwrap_or(&TAX_BRACKETS[TAX_BRACKETS.len() - 1])
}

/// Tax percentage for a holding of `elapsed_periods`
pub fn resolve_tax_rate(elapsed_periods: i64) -> f64 {
    bracket_for(elapsed_periods).percent
}
