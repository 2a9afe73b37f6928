//! Engine configuration
//!
//! Defaults can be overridden through environment variables:
//!   M2M_MAX_GOAL_PERIODS, M2M_INSTALLMENT_STRATEGY

use std::env;

use crate::goal::DEFAULT_MAX_GOAL_PERIODS;
use crate::installment::InstallmentStrategy;

pub const MAX_GOAL_PERIODS_VAR: &str = "M2M_MAX_GOAL_PERIODS";
pub const INSTALLMENT_STRATEGY_VAR: &str = "M2M_INSTALLMENT_STRATEGY";

/// Tunable parameters of the calculation engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Iteration ceiling of the goal search
    pub max_goal_periods: u32,

    /// Comparison used by the installment advisor
    pub installment_strategy: InstallmentStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_goal_periods: DEFAULT_MAX_GOAL_PERIODS,
            installment_strategy: InstallmentStrategy::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_goal_periods = lookup(MAX_GOAL_PERIODS_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&periods: &u32| periods > 0)
            .unwrap_or(defaults.max_goal_periods);

        let installment_strategy = lookup(INSTALLMENT_STRATEGY_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.installment_strategy);

        Self {
            max_goal_periods,
            installment_strategy,
        }
    }

    pub fn with_installment_strategy(mut self, strategy: InstallmentStrategy) -> Self {
        self.installment_strategy = strategy;
        self
    }
}
