//! Finance engine facade
//!
//! Bundles the calculation modules behind one entry point configured once by
//! the shell.

use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::goal::{solve_time_to_goal_with_limit, GoalResult};
use crate::growth::{project_until, GrowthProjection};
use crate::installment::{advise_installment, InstallmentDecision};
use crate::rates::{AnnualPercent, MonthlyRate};
use crate::valuation::{evaluate, ValuationResult};

/// Stateless calculator holding only its configuration
///
/// # Example
/// ```
/// use mark_to_market::{FinanceEngine, AnnualPercent};
///
/// let engine = FinanceEngine::default();
/// let rate = AnnualPercent(12.0).to_monthly();
/// let goal = engine.solve_time_to_goal(0.0, 1200.0, rate, 100.0);
/// assert!(goal.periods.unwrap() <= 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FinanceEngine {
    config: EngineConfig,
}

impl FinanceEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from the environment
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mark-to-market valuation at the reference instant `now`
    pub fn evaluate(
        &self,
        principal: f64,
        sale_value: f64,
        annual: AnnualPercent,
        purchase: DateTime<Utc>,
        maturity: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> EngineResult<ValuationResult> {
        evaluate(principal, sale_value, annual, purchase, maturity, now)
    }

    /// Compound growth of `principal` from `now` until `end`
    pub fn project_until(
        &self,
        principal: f64,
        annual: AnnualPercent,
        now: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<GrowthProjection> {
        project_until(principal, annual, now, end)
    }

    /// Periods to grow `initial` into `target`, bounded by the configured ceiling
    pub fn solve_time_to_goal(
        &self,
        initial: f64,
        target: f64,
        rate: MonthlyRate,
        contribution: f64,
    ) -> GoalResult {
        solve_time_to_goal_with_limit(
            initial,
            target,
            rate,
            contribution,
            self.config.max_goal_periods,
        )
    }

    /// Lump sum versus installments using the configured strategy
    pub fn advise_installment(
        &self,
        lump_sum_price: f64,
        financed_total: f64,
        rate: MonthlyRate,
        count: u32,
    ) -> EngineResult<InstallmentDecision> {
        advise_installment(
            lump_sum_price,
            financed_total,
            rate,
            count,
            self.config.installment_strategy,
        )
    }
}
