//! Plain-text reports

use crate::goal::GoalResult;
use crate::growth::GrowthProjection;
use crate::installment::InstallmentDecision;
use crate::rates::AnnualPercent;
use crate::valuation::ValuationResult;

fn header(title: &str) -> String {
    format!("\n{}\n{}\n", title, "-".repeat(40))
}

fn amount(label: &str, value: f64) -> String {
    format!("{:<30} {:>15.2}\n", label, value)
}

fn percent(label: &str, value: f64) -> String {
    format!("{:<30} {:>14.2}%\n", label, value)
}

fn months(label: &str, count: impl std::fmt::Display) -> String {
    format!("{:<30} {:>8} months\n", label, count)
}

fn text(label: &str, value: impl ToString) -> String {
    format!("{:<30} {:>15}\n", label, value.to_string())
}

/// Mark-to-market report
pub fn valuation(result: &ValuationResult) -> String {
    let mut out = [
        header("Mark-to-market valuation"),
        amount("Initial amount:", result.initial_amount),
        percent("Contracted rate:", result.applied_rate.value()),
        amount("Sale value (quoted):", result.gross_sale_value),
        percent("Tax rate:", result.tax_percent),
        amount("Tax paid:", result.tax_amount()),
        amount("Sale value (net):", result.net_sale_value),
        amount("Value at maturity:", result.maturity_value),
        percent("Share of maturity value:", result.percent_of_maturity),
        months("Time remaining:", result.remaining_periods),
        percent("Break-even rate elsewhere:", result.opportunity_rate.value()),
    ]
    .concat();

    if result.sale_beats_maturity() {
        out.push_str("Selling now captures more than holding to maturity\n");
    }
    out
}

/// Compound growth report
pub fn projection(result: &GrowthProjection) -> String {
    [
        header("Compound interest"),
        amount("Initial amount:", result.principal),
        text("Annual rate:", result.annual_rate),
        text("Monthly rate:", result.monthly_rate),
        months("Holding period:", result.periods),
        amount("Final amount:", result.final_amount),
    ]
    .concat()
}

/// Savings goal report
pub fn goal(initial: f64, target: f64, annual: AnnualPercent, result: &GoalResult) -> String {
    let Some((years, leftover)) = result.years_and_months() else {
        return format!(
            "The target of {:.2} cannot be reached with the given parameters (accumulated {:.2})\n",
            target, result.final_amount
        );
    };

    [
        header("Time to goal"),
        amount("Initial amount:", initial),
        amount("Target amount:", target),
        percent("Annual rate:", annual.value()),
        format!("{:<30} {} years and {} months\n", "Minimum time:", years, leftover),
        amount("Final amount:", result.final_amount),
    ]
    .concat()
}

/// Installment decision report
pub fn installment(decision: &InstallmentDecision, financed_total: f64, count: u32) -> String {
    [
        header("Lump sum or installments"),
        amount("Lump-sum price:", decision.lump_sum_price),
        amount("Financed price:", financed_total),
        months("Installments:", count),
        text("Comparison:", decision.strategy),
        amount("Cost of financing:", decision.financed_cost),
        amount("Amount saved:", decision.savings),
        format!("{}\n", decision.message()),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_report_splits_years() {
        let result = GoalResult { periods: Some(27), final_amount: 5000.0 };
        let text = goal(0.0, 5000.0, AnnualPercent(10.0), &result);
        assert!(text.contains("2 years and 3 months"));
    }

    #[test]
    fn test_unreachable_goal_report() {
        let result = GoalResult { periods: None, final_amount: 100.0 };
        let text = goal(100.0, 1e6, AnnualPercent(0.0), &result);
        assert!(text.contains("cannot be reached"));
    }

    #[test]
    fn test_aligned_amount_lines() {
        assert_eq!(
            amount("Final amount:", 1234.5),
            format!("{:<30} {:>15}\n", "Final amount:", "1234.50")
        );
        assert_eq!(months("Time remaining:", -7), format!("{:<30} {:>8} months\n", "Time remaining:", -7));
    }
}
