//! Conversions between annualized and monthly rates

use super::types::{AnnualPercent, MonthlyPercent, MonthlyRate, PERIODS_PER_YEAR};
use crate::error::{EngineError, EngineResult};

/// Convert an annual percentage to the equivalent compound monthly decimal rate
///
/// `(1 + annual/100)^(1/12) - 1`
///
/// Precondition: `annual > -100`. Outside that domain the result is NaN; use
/// [`AnnualPercent::try_to_monthly`] when the input is not already validated.
pub fn annual_percent_to_monthly_decimal(annual: AnnualPercent) -> MonthlyRate {
    MonthlyRate((1.0 + annual.0 / 100.0).powf(1.0 / PERIODS_PER_YEAR as f64) - 1.0)
}

/// Convert a monthly percentage to the equivalent compound annual percentage
///
/// `((1 + monthly/100)^12 - 1) * 100`
pub fn monthly_percent_to_annual_percent(monthly: MonthlyPercent) -> AnnualPercent {
    let monthly_rate = monthly.0 / 100.0;
    AnnualPercent(((1.0 + monthly_rate).powi(PERIODS_PER_YEAR as i32) - 1.0) * 100.0)
}

impl AnnualPercent {
    /// Unchecked conversion to a monthly decimal rate
    pub fn to_monthly(self) -> MonthlyRate {
        annual_percent_to_monthly_decimal(self)
    }

    /// Checked conversion to a monthly decimal rate
    pub fn try_to_monthly(self) -> EngineResult<MonthlyRate> {
        if !self.0.is_finite() || self.0 <= -100.0 {
            return Err(EngineError::annual_rate_out_of_domain(self.0));
        }
        Ok(annual_percent_to_monthly_decimal(self))
    }
}

impl MonthlyPercent {
    /// Convert to the equivalent annual percentage
    pub fn to_annual(self) -> AnnualPercent {
        monthly_percent_to_annual_percent(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_twelve_percent_annual() {
        let monthly = annual_percent_to_monthly_decimal(AnnualPercent(12.0));
        // 1.12^(1/12) - 1 ≈ 0.9489%
        assert!((monthly.value() - 0.009488793).abs() < 1e-8);
    }

    #[test]
    fn test_one_percent_monthly() {
        let annual = monthly_percent_to_annual_percent(MonthlyPercent(1.0));
        // 1.01^12 - 1 ≈ 12.6825%
        assert!((annual.value() - 12.682503).abs() < 1e-5);
    }

    #[test]
    fn test_round_trip_recovers_annual() {
        for &annual in &[-50.0, -5.0, 0.0, 0.5, 6.5, 10.0, 13.75, 100.0, 250.0] {
            let monthly = AnnualPercent(annual).to_monthly();
            let back = monthly.to_percent().to_annual();
            assert_relative_eq!(back.value(), annual, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(AnnualPercent(0.0).to_monthly(), MonthlyRate(0.0));
        assert_eq!(MonthlyPercent(0.0).to_annual(), AnnualPercent(0.0));
    }

    #[test]
    fn test_out_of_domain_is_nan_unchecked() {
        assert!(AnnualPercent(-150.0).to_monthly().value().is_nan());
    }

    #[test]
    fn test_checked_conversion() {
        assert!(AnnualPercent(10.0).try_to_monthly().is_ok());
        assert!(AnnualPercent(-100.0).try_to_monthly().unwrap_err().is_invalid_rate());
        assert!(AnnualPercent(f64::NAN).try_to_monthly().is_err());
    }
}
