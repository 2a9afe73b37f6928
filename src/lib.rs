//! Mark-to-market - personal-finance calculator for fixed income positions
//!
//! This library provides:
//! - Annual/monthly rate conversions with distinct rate types
//! - Regressive tax brackets by holding period
//! - Compound growth projection and after-tax proceeds
//! - Mark-to-market valuation: sell now or hold to maturity
//! - Time to reach a savings goal with monthly contributions
//! - Lump sum versus installment purchase advice
//!
//! Every calculation is a pure function of its inputs; the reference "now"
//! instant is always passed in by the caller.

pub mod error;
pub mod config;
pub mod periods;
pub mod rates;
pub mod tax;
pub mod growth;
pub mod valuation;
pub mod goal;
pub mod installment;
pub mod engine;
pub mod cli;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use config::EngineConfig;
pub use engine::FinanceEngine;
pub use rates::{AnnualPercent, MonthlyPercent, MonthlyRate};
pub use valuation::ValuationResult;
pub use goal::GoalResult;
pub use installment::{InstallmentDecision, InstallmentStrategy, PaymentChoice};
