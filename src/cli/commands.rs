//! Subcommand definitions and dispatch

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use serde::Serialize;

use super::dates::parse_month_year;
use super::report;
use crate::config::EngineConfig;
use crate::engine::FinanceEngine;
use crate::installment::InstallmentStrategy;
use crate::rates::AnnualPercent;

#[derive(Parser, Debug)]
#[command(
    name = "mark2market",
    version,
    about = "Mark-to-market and personal-finance calculations",
    long_about = "Command-line calculator for fixed income positions: decide whether \
                  to sell before maturity, project compound interest, estimate the time \
                  to a savings goal and compare paying in full with installments."
)]
pub struct Cli {
    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate whether to sell a position now or hold it to maturity
    #[command(alias = "shouldSell")]
    ShouldSell {
        /// Amount originally invested
        #[arg(short = 'c', long)]
        initial: f64,
        /// Current market sale value
        #[arg(short = 'a', long)]
        current: f64,
        /// Annual rate contracted at purchase, in percent
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        rate: f64,
        /// Purchase month (MM/YYYY)
        #[arg(short = 'i', long)]
        start: String,
        /// Maturity month (MM/YYYY)
        #[arg(short = 'f', long)]
        end: String,
    },

    /// Compound interest from today until a month
    Compound {
        /// Amount invested
        #[arg(short = 'c', long)]
        initial: f64,
        /// Annual rate, in percent
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        rate: f64,
        /// Final month (MM/YYYY)
        #[arg(short = 'f', long)]
        end: String,
    },

    /// Time needed to reach a target amount with monthly contributions
    TimeToGoal {
        /// Amount available today
        #[arg(short = 'c', long)]
        initial: f64,
        /// Target amount
        #[arg(short = 'f', long)]
        target: f64,
        /// Expected average annual rate, in percent
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        rate: f64,
        /// Monthly contribution
        #[arg(short = 'a', long, default_value_t = 0.0)]
        contribution: f64,
    },

    /// Compare paying in full with paying in installments
    Installment {
        /// Price when paying in full
        #[arg(short = 'v', long)]
        lump_sum: f64,
        /// Total price when paying in installments
        #[arg(short = 'p', long)]
        financed: f64,
        /// Number of monthly installments
        #[arg(short = 'm', long)]
        installments: u32,
        /// Annual rate the money would earn meanwhile, in percent
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        rate: f64,
        /// Comparison strategy (present-value or nominal)
        #[arg(short = 's', long)]
        strategy: Option<InstallmentStrategy>,
    },
}

fn render<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).context("Failed to serialize result")
    } else {
        Ok(text())
    }
}

fn require_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        anyhow::bail!("Argument --{} must be a finite number, got {}", name, value)
    }
}

/// Execute a parsed command at the reference instant `now` and return its output
pub fn run(cli: Cli, config: EngineConfig, now: DateTime<Utc>) -> Result<String> {
    debug!("Running {:?} at {}", cli.command, now);

    match cli.command {
        Command::ShouldSell { initial, current, rate, start, end } => {
            let purchase = parse_month_year(&start).context("Invalid --start")?;
            let maturity = parse_month_year(&end).context("Invalid --end")?;
            let engine = FinanceEngine::new(config);

            let result = engine
                .evaluate(
                    require_finite("initial", initial)?,
                    require_finite("current", current)?,
                    AnnualPercent(require_finite("rate", rate)?),
                    purchase,
                    maturity,
                    now,
                )
                .map_err(|err| {
                    warn!("Valuation failed: {}", err);
                    err
                })?;

            info!(
                "Valuation: net sale {:.2} vs maturity {:.2}",
                result.net_sale_value, result.maturity_value
            );
            render(cli.json, &result, || report::valuation(&result))
        }

        Command::Compound { initial, rate, end } => {
            let end = parse_month_year(&end).context("Invalid --end")?;
            let engine = FinanceEngine::new(config);

            let result = engine.project_until(
                require_finite("initial", initial)?,
                AnnualPercent(require_finite("rate", rate)?),
                now,
                end,
            )?;

            info!("Projected {} periods to {:.2}", result.periods, result.final_amount);
            render(cli.json, &result, || report::projection(&result))
        }

        Command::TimeToGoal { initial, target, rate, contribution } => {
            let annual = AnnualPercent(require_finite("rate", rate)?);
            let monthly = annual.try_to_monthly()?;
            let engine = FinanceEngine::new(config);

            let result = engine.solve_time_to_goal(
                require_finite("initial", initial)?,
                require_finite("target", target)?,
                monthly,
                require_finite("contribution", contribution)?,
            );

            if let Err(err) = result.require_reached(target) {
                warn!("Goal of {:.2} is unreachable", target);
                let message = report::goal(initial, target, annual, &result);
                return Err(anyhow::Error::new(err).context(message.trim().to_string()));
            }
            info!("Goal reached in {:?} periods", result.periods);
            render(cli.json, &result, || report::goal(initial, target, annual, &result))
        }

        Command::Installment { lump_sum, financed, installments, rate, strategy } => {
            let monthly = AnnualPercent(require_finite("rate", rate)?).try_to_monthly()?;
            let config = match strategy {
                Some(strategy) => config.with_installment_strategy(strategy),
                None => config,
            };
            let engine = FinanceEngine::new(config);

            let decision = engine.advise_installment(lump_sum, financed, monthly, installments)?;

            info!(
                "Installment advice: {:?}, saves {:.2}",
                decision.recommendation, decision.savings
            );
            render(cli.json, &decision, || {
                report::installment(&decision, financed, installments)
            })
        }
    }
}
