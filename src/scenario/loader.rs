//! Load scenarios from CSV
//!
//! Columns: `ScenarioID,Mode,Amount,AnnualRate,Years,StepUp,StepUpRate`.
//! `StepUp` and `StepUpRate` may be blank and are ignored for lump sums.

use super::Scenario;
use crate::error::{CalculatorError, CalculatorResult};
use crate::inputs::{LumpSumInput, SipInput};
use crate::projection::InvestmentPlan;
use csv::Reader;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Mode")]
    mode: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "StepUp", default)]
    step_up: Option<bool>,
    #[serde(rename = "StepUpRate", default)]
    step_up_rate: Option<f64>,
}

impl CsvRow {
    fn to_scenario(self) -> CalculatorResult<Scenario> {
        finite("Amount", self.amount)?;
        finite("AnnualRate", self.annual_rate)?;

        let plan = match self.mode.trim() {
            "LumpSum" => InvestmentPlan::LumpSum(LumpSumInput::new(self.amount, self.annual_rate, self.years)),
            "SIP" => {
                let mut input = SipInput::new(self.amount, self.annual_rate, self.years);
                input.step_up_enabled = self.step_up.unwrap_or(false);
                if let Some(rate) = self.step_up_rate {
                    input.step_up_rate_percent = finite("StepUpRate", rate)?;
                }
                InvestmentPlan::Sip(input)
            }
            other => return Err(CalculatorError::UnknownMode(other.to_string())),
        };

        Ok(Scenario { id: self.scenario_id, plan })
    }
}

fn finite(field: &'static str, value: f64) -> CalculatorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::InvalidInput { field, value })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> CalculatorResult<Vec<Scenario>> {
    let file = std::fs::File::open(path.as_ref())?;
    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> CalculatorResult<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
