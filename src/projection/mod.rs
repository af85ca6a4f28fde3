//! Compounding projectors and the plan layer built on them

mod series;
mod lump_sum;
mod sip;
mod plan;

pub use series::{ProjectionSeries, YearPoint};
pub use lump_sum::project_lump_sum;
pub use sip::{project_sip, MONTHS_PER_YEAR};
pub use plan::{
    Allocation, InvestmentMode, InvestmentPlan, ProjectionResult, ProjectionSummary, YearRow,
};
