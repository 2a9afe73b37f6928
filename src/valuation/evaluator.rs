//! Mark-to-market evaluation

use chrono::{DateTime, Utc};

use super::result::ValuationResult;
use crate::error::{EngineError, EngineResult};
use crate::growth::{compound_growth, net_of_tax};
use crate::periods::periods_between;
use crate::rates::{AnnualPercent, PERIODS_PER_YEAR};
use crate::tax::resolve_tax_rate;

/// Evaluate selling a position now against holding it to maturity
///
/// # Arguments
/// * `principal` - Amount originally invested
/// * `sale_value` - Current market sale value, before tax
/// * `annual` - Annual rate contracted at purchase
/// * `purchase` / `maturity` - Purchase and maturity instants
/// * `now` - Reference instant of the evaluation
///
/// The maturity value is projected over `total_periods - 1` periods, leaving
/// out the partial final period.
///
/// # Errors
/// * `UndefinedOpportunityRate` when no whole period remains until maturity
/// * `InvalidRate` when the annual rate is out of domain or the break-even
///   ratio is not positive
/// * `NonFinite` when any derived value is NaN or infinite
pub fn evaluate(
    principal: f64,
    sale_value: f64,
    annual: AnnualPercent,
    purchase: DateTime<Utc>,
    maturity: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EngineResult<ValuationResult> {
    let held_periods = periods_between(purchase, now);
    let total_periods = periods_between(purchase, maturity);
    let remaining_periods = periods_between(now, maturity);

    let monthly_rate = annual.try_to_monthly()?;
    let tax_percent = resolve_tax_rate(held_periods);

    // Tax applies to the quoted sale's gain, not to a projected value
    let net_sale_value = EngineError::check_finite(
        "net sale value",
        net_of_tax(principal, sale_value, tax_percent),
    )?;

    let maturity_value = EngineError::check_finite(
        "maturity value",
        compound_growth(principal, monthly_rate, total_periods - 1),
    )?;

    let percent_of_maturity = EngineError::check_finite(
        "percent of maturity",
        net_sale_value / maturity_value * 100.0,
    )?;

    let opportunity_rate = opportunity_rate(maturity_value, net_sale_value, remaining_periods)?;

    Ok(ValuationResult {
        initial_amount: principal,
        applied_rate: annual,
        purchase_instant: purchase,
        maturity_instant: maturity,
        evaluation_instant: now,
        gross_sale_value: sale_value,
        net_sale_value,
        maturity_value,
        percent_of_maturity,
        tax_percent,
        held_periods,
        total_periods,
        remaining_periods,
        opportunity_rate,
    })
}

/// Annual rate that grows `net_sale_value` into `maturity_value` over the remaining periods
fn opportunity_rate(
    maturity_value: f64,
    net_sale_value: f64,
    remaining_periods: i64,
) -> EngineResult<AnnualPercent> {
    if remaining_periods == 0 {
        return Err(EngineError::UndefinedOpportunityRate { remaining_periods });
    }

    let ratio = maturity_value / net_sale_value;
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(EngineError::InvalidRate(format!(
            "maturity to sale ratio {} has no real annualized root",
            ratio
        )));
    }

    let remaining_years = remaining_periods as f64 / PERIODS_PER_YEAR as f64;
    let rate = (ratio.powf(1.0 / remaining_years) - 1.0) * 100.0;
    Ok(AnnualPercent(EngineError::check_finite("opportunity rate", rate)?))
}
