//! Return Calculator - year-by-year compounding for lump sum and SIP investments
//!
//! This library provides:
//! - Lump-sum projection with annual compounding
//! - SIP projection with monthly compounding and optional annual step-up
//! - Summary statistics, invested/returns allocation and year tables
//! - Input clamping to the calculator's control ranges
//! - Batch scenario runs with CSV and JSON reports

pub mod config;
pub mod error;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{CalculatorError, CalculatorResult};
pub use inputs::{LumpSumInput, SipInput};
pub use projection::{
    project_lump_sum, project_sip, InvestmentMode, InvestmentPlan, ProjectionResult,
    ProjectionSeries, ProjectionSummary, YearPoint,
};
pub use scenario::{Scenario, ScenarioResult, ScenarioRunner};
