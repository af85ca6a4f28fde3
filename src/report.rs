//! Output writers for projection results: text, CSV, and JSON

use crate::error::CalculatorResult;
use crate::format::{format_inr, format_percent};
use crate::projection::{InvestmentPlan, ProjectionResult};
use crate::scenario::ScenarioResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Write;

/// Render the summary block and year table for one result
pub fn render_text(result: &ProjectionResult) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    write_text(&mut out, result).map(|_| out).unwrap_or_default()
}

fn write_text(out: &mut String, result: &ProjectionResult) -> fmt::Result {
    let summary = result.summary();
    let allocation = result.allocation();
    let is_sip = matches!(result.plan, InvestmentPlan::Sip(_));

    writeln!(out, "{}", describe_plan(&result.plan))?;
    writeln!(out, "{}", "=".repeat(48))?;
    writeln!(out, "  Invested Amount:  {:>18}", format_inr(summary.initial_investment))?;
    writeln!(out, "  Est. Returns:     {:>18}", format_inr(allocation.returns))?;
    writeln!(out, "  Total Value:      {:>18}", format_inr(summary.total_returns))?;
    writeln!(out, "  Invested Share:   {:>18}", format_percent(allocation.invested_share_percent()))?;
    writeln!(out, "  Gain:             {:>18}", format_percent(summary.percentage_gained))?;
    writeln!(out)?;

    if is_sip {
        writeln!(out, "{:<8} {:>16} {:>16} {:>16}", "Year", "Value", "Invested", "Returns")?;
    } else {
        writeln!(out, "{:<8} {:>16} {:>16}", "Year", "Value", "Returns")?;
    }
    writeln!(out, "{}", "-".repeat(if is_sip { 59 } else { 42 }))?;

    for row in result.rows() {
        let year = format!("Year {}", row.year);
        match row.invested {
            Some(invested) => writeln!(out, "{:<8} {:>16} {:>16} {:>16}",
                year, format_inr(row.value), format_inr(invested), format_inr(row.returns))?,
            None => writeln!(out, "{:<8} {:>16} {:>16}",
                year, format_inr(row.value), format_inr(row.returns))?,
        }
    }

    Ok(())
}

fn describe_plan(plan: &InvestmentPlan) -> String {
    match plan {
        InvestmentPlan::LumpSum(input) => format!(
            "Lump sum of {} at {}% for {} years",
            format_inr(input.principal), input.annual_rate_percent, input.years
        ),
        InvestmentPlan::Sip(input) if input.step_up_enabled => format!(
            "SIP of {}/month at {}% for {} years, stepping up {}% yearly",
            format_inr(input.monthly_contribution), input.annual_rate_percent, input.years,
            input.step_up_rate_percent
        ),
        InvestmentPlan::Sip(input) => format!(
            "SIP of {}/month at {}% for {} years",
            format_inr(input.monthly_contribution), input.annual_rate_percent, input.years
        ),
    }
}

/// CSV output row, one per scenario-year
#[derive(Debug, Serialize)]
struct CsvRow {
    scenario_id: u32,
    mode: String,
    year: u32,
    value: f64,
    invested: Option<f64>,
    returns: f64,
}

/// Write scenario results as CSV
pub fn write_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> CalculatorResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for scenario in results {
        let mode = scenario.result.plan.mode().to_string();
        for row in scenario.result.rows() {
            csv_writer.serialize(CsvRow {
                scenario_id: scenario.scenario_id,
                mode: mode.clone(),
                year: row.year,
                value: row.value,
                invested: row.invested,
                returns: row.returns,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// JSON report envelope
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ReportEntry<'a>>,
}

/// One scenario with its derived statistics
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    #[serde(flatten)]
    pub scenario: &'a ScenarioResult,
    pub summary: crate::projection::ProjectionSummary,
    pub allocation: crate::projection::Allocation,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [ScenarioResult]) -> Self {
        Self {
            generated_at: Utc::now(),
            results: results
                .iter()
                .map(|scenario| ReportEntry {
                    scenario,
                    summary: scenario.result.summary(),
                    allocation: scenario.result.allocation(),
                })
                .collect(),
        }
    }
}

/// Write scenario results as pretty-printed JSON
pub fn write_json<W: Write>(writer: W, results: &[ScenarioResult]) -> CalculatorResult<()> {
    serde_json::to_writer_pretty(writer, &Report::new(results))?;
    Ok(())
}
