//! Scenario runner for batch projections
//!
//! Holds the calculator configuration once, then runs single plans, batches
//! of scenarios loaded from CSV, or rate sweeps of one plan.

pub mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader};

use crate::config::CalculatorConfig;
use crate::projection::{InvestmentPlan, ProjectionResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A named plan in a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub plan: InvestmentPlan,
}

/// Projection output for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_id: u32,
    #[serde(flatten)]
    pub result: ProjectionResult,
}

/// Runs projections under a shared configuration
///
/// # Example
/// ```
/// use return_calculator::{InvestmentPlan, LumpSumInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let plan = InvestmentPlan::LumpSum(LumpSumInput::new(5_000.0, 10.0, 5));
/// let results = runner.run_rate_sweep(&plan, &[8.0, 10.0, 12.0]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
}

impl ScenarioRunner {
    /// Create runner with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Run a single plan, clamping inputs when configured to
    pub fn run(&self, plan: &InvestmentPlan) -> ProjectionResult {
        if self.config.clamp_inputs {
            plan.clamped().project()
        } else {
            plan.project()
        }
    }

    /// Run every scenario in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        log::info!("Running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioResult {
                scenario_id: scenario.id,
                result: self.run(&scenario.plan),
            })
            .collect()
    }

    /// Run one plan at several expected returns
    pub fn run_rate_sweep(&self, plan: &InvestmentPlan, annual_rates: &[f64]) -> Vec<ProjectionResult> {
        annual_rates
            .iter()
            .map(|&rate| self.run(&plan.with_annual_rate(rate)))
            .collect()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CalculatorConfig {
        &mut self.config
    }
}
