//! Goal search
//!
//! Positive growth is simulated period by period, bounded by an iteration
//! ceiling. Without growth the answer is computed directly.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::rates::{MonthlyRate, PERIODS_PER_YEAR};

/// Iteration ceiling for the simulated path (100 years of monthly periods)
pub const DEFAULT_MAX_GOAL_PERIODS: u32 = 1200;

/// Periods needed to reach a goal and the amount accumulated by then
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    /// Periods until the goal is met; `None` when it is unreachable
    pub periods: Option<u64>,
    /// Amount at the goal, or at cutoff when unreachable
    pub final_amount: f64,
}

impl GoalResult {
    fn reached(periods: u64, final_amount: f64) -> Self {
        Self { periods: Some(periods), final_amount }
    }

    fn unreachable(final_amount: f64) -> Self {
        Self { periods: None, final_amount }
    }

    pub fn is_reachable(&self) -> bool {
        self.periods.is_some()
    }

    /// Split the period count into whole years and leftover months
    pub fn years_and_months(&self) -> Option<(u64, u64)> {
        let per_year = PERIODS_PER_YEAR as u64;
        self.periods.map(|p| (p / per_year, p % per_year))
    }

    /// Period count, or `UnreachableGoal` for the unreachable sentinel
    pub fn require_reached(&self, target: f64) -> EngineResult<u64> {
        self.periods.ok_or(EngineError::UnreachableGoal {
            target,
            accumulated: self.final_amount,
        })
    }
}

/// Periods needed to grow `initial` into `target` with the default ceiling
pub fn solve_time_to_goal(
    initial: f64,
    target: f64,
    rate: MonthlyRate,
    contribution: f64,
) -> GoalResult {
    solve_time_to_goal_with_limit(initial, target, rate, contribution, DEFAULT_MAX_GOAL_PERIODS)
}

/// Periods needed to grow `initial` into `target`
///
/// Each period the amount grows by `rate` and then receives `contribution`.
/// With a non-positive rate the growth is ignored and the count is linear.
/// The simulated path gives up once it exceeds `max_periods`.
pub fn solve_time_to_goal_with_limit(
    initial: f64,
    target: f64,
    rate: MonthlyRate,
    contribution: f64,
    max_periods: u32,
) -> GoalResult {
    if initial >= target {
        return GoalResult::reached(0, initial);
    }

    if rate.value() <= 0.0 {
        if contribution <= 0.0 {
            return GoalResult::unreachable(initial);
        }
        let periods = ((target - initial) / contribution).ceil();
        return GoalResult::reached(periods as u64, initial + contribution * periods);
    }

    let mut periods: u64 = 0;
    let mut amount = initial;

    while amount < target {
        periods += 1;
        amount = amount * rate.growth_factor() + contribution;

        if periods > max_periods as u64 {
            return GoalResult::unreachable(amount);
        }
    }

    GoalResult::reached(periods, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_already_met() {
        for rate in [-0.5, 0.0, 0.01] {
            for contribution in [-10.0, 0.0, 100.0] {
                let result = solve_time_to_goal(1000.0, 500.0, MonthlyRate(rate), contribution);
                assert_eq!(result, GoalResult { periods: Some(0), final_amount: 1000.0 });
            }
        }
    }

    #[test]
    fn test_linear_path_exact() {
        let result = solve_time_to_goal(0.0, 1200.0, MonthlyRate::ZERO, 100.0);
        assert_eq!(result, GoalResult { periods: Some(12), final_amount: 1200.0 });
    }

    #[test]
    fn test_linear_path_rounds_up() {
        let result = solve_time_to_goal(0.0, 1250.0, MonthlyRate::ZERO, 100.0);
        assert_eq!(result.periods, Some(13));
        assert_eq!(result.final_amount, 1300.0);
    }

    #[test]
    fn test_negative_rate_degrades_to_linear() {
        let result = solve_time_to_goal(100.0, 400.0, MonthlyRate(-0.02), 50.0);
        assert_eq!(result.periods, Some(6));
        assert_eq!(result.final_amount, 400.0);
    }

    #[test]
    fn test_no_growth_no_contribution() {
        let result = solve_time_to_goal(100.0, 1e12, MonthlyRate::ZERO, 0.0);
        assert_eq!(result, GoalResult { periods: None, final_amount: 100.0 });
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_compound_path() {
        // 1000 at 1% a month with no contributions doubles in 70 months
        let result = solve_time_to_goal(1000.0, 2000.0, MonthlyRate(0.01), 0.0);
        assert_eq!(result.periods, Some(70));
        assert!(result.final_amount >= 2000.0);
        assert!(1000.0 * 1.01_f64.powi(69) < 2000.0);
    }

    #[test]
    fn test_contributions_speed_up_goal() {
        let without = solve_time_to_goal(1000.0, 10_000.0, MonthlyRate(0.005), 0.0);
        let with = solve_time_to_goal(1000.0, 10_000.0, MonthlyRate(0.005), 200.0);
        assert!(with.periods.unwrap() < without.periods.unwrap());
    }

    #[test]
    fn test_iteration_ceiling() {
        let result = solve_time_to_goal(1.0, 1e15, MonthlyRate(0.0001), 0.01);
        assert!(result.periods.is_none());
        // 1201 periods simulated before giving up
        let mut expected = 1.0;
        for _ in 0..1201 {
            expected = expected * 1.0001 + 0.01;
        }
        assert!((result.final_amount - expected).abs() < 1e-9);
    }

    #[test]
    fn test_custom_ceiling() {
        let result = solve_time_to_goal_with_limit(1000.0, 2000.0, MonthlyRate(0.01), 0.0, 12);
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_years_and_months() {
        let result = GoalResult { periods: Some(27), final_amount: 0.0 };
        assert_eq!(result.years_and_months(), Some((2, 3)));
        assert_eq!(GoalResult::unreachable(5.0).years_and_months(), None);
    }

    #[test]
    fn test_require_reached() {
        assert_eq!(GoalResult::reached(4, 10.0).require_reached(10.0), Ok(4));
        let err = GoalResult::unreachable(5.0).require_reached(10.0).unwrap_err();
        assert!(err.is_unreachable_goal());
    }
}
