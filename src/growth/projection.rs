//! Projection of a principal until a target date

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::compound::compound_growth;
use crate::error::{EngineError, EngineResult};
use crate::periods::periods_between;
use crate::rates::{AnnualPercent, MonthlyRate};

/// Result of growing a principal until a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub principal: f64,
    pub annual_rate: AnnualPercent,
    pub monthly_rate: MonthlyRate,
    /// Whole periods between the reference instant and the end date
    pub periods: i64,
    pub final_amount: f64,
}

/// Grow `principal` at `annual` from `now` until `end`
pub fn project_until(
    principal: f64,
    annual: AnnualPercent,
    now: DateTime<Utc>,
    end: DateTime<Utc>,
) -> EngineResult<GrowthProjection> {
    let monthly_rate = annual.try_to_monthly()?;
    let periods = periods_between(now, end);
    let final_amount = compound_growth(principal, monthly_rate, periods);

    Ok(GrowthProjection {
        principal,
        annual_rate: annual,
        monthly_rate,
        periods,
        final_amount: EngineError::check_finite("final amount", final_amount)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_one_year_at_twelve_percent() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // 360 days = 12 periods
        let end = now + chrono::Duration::days(360);
        let projection = project_until(1000.0, AnnualPercent(12.0), now, end).unwrap();

        assert_eq!(projection.periods, 12);
        assert!((projection.final_amount - 1120.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_in_the_past_discounts() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = now - chrono::Duration::days(45);
        let projection = project_until(1000.0, AnnualPercent(10.0), now, end).unwrap();

        assert_eq!(projection.periods, -2);
        assert!(projection.final_amount < 1000.0);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let err = project_until(1000.0, AnnualPercent(-120.0), now, now).unwrap_err();
        assert!(err.is_invalid_rate());
    }
}
