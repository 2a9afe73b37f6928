//! Error types for the calculation engine
//!
//! Every failure is returned as a value so the calling shell decides how to
//! present it. The engine itself never logs or exits.

use thiserror::Error;

/// Failure outcomes of an engine calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A rate yields a non-finite or undefined growth factor
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// No periods remain until maturity, so the annualized break-even rate has no exponent
    #[error("Opportunity rate is undefined with {remaining_periods} periods remaining")]
    UndefinedOpportunityRate { remaining_periods: i64 },

    /// The savings goal cannot be reached with the given parameters
    #[error("Goal of {target:.2} is unreachable; accumulated {accumulated:.2}")]
    UnreachableGoal { target: f64, accumulated: f64 },

    /// A derived quantity came out as NaN or infinity
    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

impl EngineError {
    /// Create an invalid-rate error for an annual percentage outside (-100, inf)
    pub fn annual_rate_out_of_domain(annual_percent: f64) -> Self {
        Self::InvalidRate(format!(
            "annual rate {}% must be finite and greater than -100%",
            annual_percent
        ))
    }

    /// Create an invalid-rate error for a periodic decimal rate at or below -1
    pub fn periodic_rate_out_of_domain(periodic_rate: f64) -> Self {
        Self::InvalidRate(format!(
            "periodic rate {} must be finite and greater than -1",
            periodic_rate
        ))
    }

    /// Return `value` unchanged if finite, otherwise a `NonFinite` error naming it
    pub fn check_finite(quantity: &'static str, value: f64) -> EngineResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }

    /// Check if this is an invalid-rate error
    pub fn is_invalid_rate(&self) -> bool {
        matches!(self, Self::InvalidRate(_))
    }

    /// Check if this is an unreachable-goal error
    pub fn is_unreachable_goal(&self) -> bool {
        matches!(self, Self::UnreachableGoal { .. })
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
