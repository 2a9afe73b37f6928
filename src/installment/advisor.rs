//! Installment advisor
//!
//! Two comparison strategies are supported:
//! - **PresentValue**: the financed total is split into equal installments paid
//!   at the end of each period and discounted at the periodic rate the buyer
//!   could earn on the money kept invested
//! - **Nominal**: the two prices are compared as quoted

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::rates::MonthlyRate;

const PRICE_TOLERANCE: f64 = 1e-9;

/// How the financed price is compared with the lump-sum price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallmentStrategy {
    /// Discount the installment stream to today
    #[default]
    PresentValue,
    /// Compare quoted totals directly
    Nominal,
}

impl FromStr for InstallmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pv" | "present-value" | "present_value" => Ok(Self::PresentValue),
            "nominal" => Ok(Self::Nominal),
            other => Err(format!("Unknown installment strategy: {}", other)),
        }
    }
}

impl fmt::Display for InstallmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PresentValue => write!(f, "present-value"),
            Self::Nominal => write!(f, "nominal"),
        }
    }
}

/// Preferred way to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentChoice {
    PayInFull,
    Installments,
    /// Both options cost the same
    Either,
}

/// Recommendation and the amount it saves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentDecision {
    /// Amount saved by following the recommendation
    pub savings: f64,
    pub recommendation: PaymentChoice,
    pub strategy: InstallmentStrategy,
    pub lump_sum_price: f64,
    /// Cost of financing as seen by the strategy (present value or nominal total)
    pub financed_cost: f64,
}

impl InstallmentDecision {
    /// Human readable recommendation
    pub fn message(&self) -> &'static str {
        match self.recommendation {
            PaymentChoice::PayInFull => "Pay in full: financing costs more",
            PaymentChoice::Installments => "Pay in installments: the money kept invested outgrows the markup",
            PaymentChoice::Either => "Either option: both cost the same",
        }
    }
}

/// Present value of `count` equal installments totalling `financed_total`
///
/// Payments fall at the end of each period. A zero count means the whole
/// amount is paid today.
pub fn present_value_of_installments(financed_total: f64, rate: MonthlyRate, count: u32) -> f64 {
    if count == 0 {
        return financed_total;
    }

    let installment = financed_total / count as f64;
    if rate.value().abs() < 1e-10 {
        return installment * count as f64;
    }

    let v = 1.0 / rate.growth_factor();
    installment * (1.0 - v.powf(count as f64)) / rate.value()
}

/// Compare paying `lump_sum_price` today with financing `financed_total`
/// over `count` periods at `rate`
pub fn advise_installment(
    lump_sum_price: f64,
    financed_total: f64,
    rate: MonthlyRate,
    count: u32,
    strategy: InstallmentStrategy,
) -> EngineResult<InstallmentDecision> {
    EngineError::check_finite("lump-sum price", lump_sum_price)?;
    EngineError::check_finite("financed price", financed_total)?;

    let financed_cost = match strategy {
        InstallmentStrategy::PresentValue => {
            if !rate.is_valid() {
                return Err(EngineError::periodic_rate_out_of_domain(rate.value()));
            }
            EngineError::check_finite(
                "present value of installments",
                present_value_of_installments(financed_total, rate, count),
            )?
        }
        InstallmentStrategy::Nominal => financed_total,
    };

    let difference = lump_sum_price - financed_cost;
    let (recommendation, savings) = if difference.abs() < PRICE_TOLERANCE {
        (PaymentChoice::Either, 0.0)
    } else if difference > 0.0 {
        (PaymentChoice::Installments, difference)
    } else {
        (PaymentChoice::PayInFull, -difference)
    };

    Ok(InstallmentDecision {
        savings,
        recommendation,
        strategy,
        lump_sum_price,
        financed_cost,
    })
}
