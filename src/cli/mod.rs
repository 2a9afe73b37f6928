//! Command-line shell
//!
//! Parses arguments, calls the engine with validated values and renders the
//! results. All logging happens here; the engine stays silent.

mod commands;
mod dates;
mod report;

pub use commands::{run, Cli, Command};
pub use dates::parse_month_year;
