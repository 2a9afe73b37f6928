//! Rate newtypes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of monthly periods in a year
pub const PERIODS_PER_YEAR: u32 = 12;

/// Annualized rate as a percentage (12.0 means 12% a year)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AnnualPercent(pub f64);

/// Monthly rate as a percentage (0.949 means 0.949% a month)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MonthlyPercent(pub f64);

/// Monthly rate as a decimal (0.00949 means 0.949% a month)
///
/// This is the representation consumed by growth, goal and installment
/// calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MonthlyRate(pub f64);

impl AnnualPercent {
    /// Raw percentage value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl MonthlyPercent {
    /// Raw percentage value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl MonthlyRate {
    /// Zero growth
    pub const ZERO: MonthlyRate = MonthlyRate(0.0);

    /// Raw decimal value
    pub fn value(self) -> f64 {
        self.0
    }

    /// One-period growth factor `1 + r`
    pub fn growth_factor(self) -> f64 {
        1.0 + self.0
    }

    /// Same rate expressed as a monthly percentage
    pub fn to_percent(self) -> MonthlyPercent {
        MonthlyPercent(self.0 * 100.0)
    }

    /// Whether the growth factor is a finite positive number
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > -1.0
    }
}

impl fmt::Display for AnnualPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}% a.a.", self.0)
    }
}

impl fmt::Display for MonthlyPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}% a.m.", self.0)
    }
}

impl fmt::Display for MonthlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_percent().fmt(f)
    }
}
