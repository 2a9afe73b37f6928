//! Valuation snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rates::AnnualPercent;

/// Outcome of a mark-to-market evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Amount originally invested
    pub initial_amount: f64,

    /// Annual rate contracted at purchase
    pub applied_rate: AnnualPercent,

    pub purchase_instant: DateTime<Utc>,
    pub maturity_instant: DateTime<Utc>,

    /// Reference "now" the evaluation was computed at
    pub evaluation_instant: DateTime<Utc>,

    /// Sale value quoted by the market, before tax
    pub gross_sale_value: f64,

    /// Sale value after tax on the gain over the initial amount
    pub net_sale_value: f64,

    /// Projected value when held until maturity
    pub maturity_value: f64,

    /// Net sale value as a percentage of the maturity value
    pub percent_of_maturity: f64,

    /// Tax percentage selected from the holding period
    pub tax_percent: f64,

    pub held_periods: i64,
    pub total_periods: i64,
    pub remaining_periods: i64,

    /// Minimum annual rate elsewhere that matches holding to maturity
    pub opportunity_rate: AnnualPercent,
}

impl ValuationResult {
    /// Whether selling now captures more than holding to maturity
    pub fn sale_beats_maturity(&self) -> bool {
        self.net_sale_value > self.maturity_value
    }

    /// Amount of tax paid on the sale
    pub fn tax_amount(&self) -> f64 {
        self.gross_sale_value - self.net_sale_value
    }
}
