//! Rate representations and conversions between annual and monthly terms
//!
//! Annualized percentages and periodic decimals never mix silently: each
//! representation is its own type and conversions are explicit.

mod types;
mod conversion;

pub use types::{AnnualPercent, MonthlyPercent, MonthlyRate, PERIODS_PER_YEAR};
pub use conversion::{annual_percent_to_monthly_decimal, monthly_percent_to_annual_percent};
