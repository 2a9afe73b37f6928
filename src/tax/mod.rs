//! Regressive income tax brackets keyed by holding period

mod brackets;

pub use brackets::{bracket_for, resolve_tax_rate, TaxBracket, TAX_BRACKETS};
