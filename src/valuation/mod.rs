//! Mark-to-market valuation of a fixed income position
//!
//! Compares selling now (net of tax) with holding to maturity and derives the
//! break-even rate an alternative investment would need.

mod evaluator;
mod result;

pub use evaluator::evaluate;
pub use result::ValuationResult;
