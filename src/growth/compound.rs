//! Compound growth primitives

use crate::rates::MonthlyRate;

/// Grow `principal` at `rate` per period for `periods` periods
///
/// `principal * (1 + rate)^periods`. Negative `periods` discounts, zero returns
/// `principal` unchanged. `rate` must stay above -1.
pub fn compound_growth(principal: f64, rate: MonthlyRate, periods: i64) -> f64 {
    principal * rate.growth_factor().powf(periods as f64)
}

/// Proceeds after taxing the gain of `gross_final` over `principal`
///
/// `gross_final - (gross_final - principal) * tax_percent / 100`. A loss
/// shrinks proportionally in the same way a gain does.
pub fn net_of_tax(principal: f64, gross_final: f64, tax_percent: f64) -> f64 {
    gross_final - (gross_final - principal) * (tax_percent / 100.0)
}
