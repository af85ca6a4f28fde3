//! Mode dispatch and derived statistics for a projection run

use crate::inputs::{LumpSumInput, SipInput};
use super::series::{ProjectionSeries, YearPoint};
use serde::{Deserialize, Serialize};

/// Which projector a plan uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentMode {
    LumpSum,
    #[serde(rename = "SIP")]
    Sip,
}

impl std::fmt::Display for InvestmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentMode::LumpSum => write!(f, "LumpSum"),
            InvestmentMode::Sip => write!(f, "SIP"),
        }
    }
}

/// A fully specified investment plan in either mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum InvestmentPlan {
    LumpSum(LumpSumInput),
    #[serde(rename = "SIP")]
    Sip(SipInput),
}

impl InvestmentPlan {
    pub fn mode(&self) -> InvestmentMode {
        match self {
            InvestmentPlan::LumpSum(_) => InvestmentMode::LumpSum,
            InvestmentPlan::Sip(_) => InvestmentMode::Sip,
        }
    }

    pub fn years(&self) -> u32 {
        match self {
            InvestmentPlan::LumpSum(input) => input.years,
            InvestmentPlan::Sip(input) => input.years,
        }
    }

    pub fn annual_rate_percent(&self) -> f64 {
        match self {
            InvestmentPlan::LumpSum(input) => input.annual_rate_percent,
            InvestmentPlan::Sip(input) => input.annual_rate_percent,
        }
    }

    /// Same plan with a different expected return
    pub fn with_annual_rate(&self, annual_rate_percent: f64) -> Self {
        match *self {
            InvestmentPlan::LumpSum(input) => {
                InvestmentPlan::LumpSum(LumpSumInput { annual_rate_percent, ..input })
            }
            InvestmentPlan::Sip(input) => {
                InvestmentPlan::Sip(SipInput { annual_rate_percent, ..input })
            }
        }
    }

    /// Same plan with inputs clamped to their control ranges
    pub fn clamped(&self) -> Self {
        match self {
            InvestmentPlan::LumpSum(input) => InvestmentPlan::LumpSum(input.clamped()),
            InvestmentPlan::Sip(input) => InvestmentPlan::Sip(input.clamped()),
        }
    }

    /// Run the projector for this plan's mode
    pub fn project(&self) -> ProjectionResult {
        let series = match self {
            InvestmentPlan::LumpSum(input) => input.project(),
            InvestmentPlan::Sip(input) => input.project(),
        };
        log::debug!("Projected {} plan over {} years", self.mode(), series.len());

        ProjectionResult { plan: *self, series }
    }

    /// Amount the returns column is measured against for a given year
    fn cost_basis(&self, point: &YearPoint) -> f64 {
        match self {
            InvestmentPlan::LumpSum(input) => input.principal,
            InvestmentPlan::Sip(_) => point.invested.unwrap_or(0.0),
        }
    }
}

/// Complete projection result: the plan and its series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub plan: InvestmentPlan,
    pub series: ProjectionSeries,
}

impl ProjectionResult {
    /// Headline statistics derived from the series
    pub fn summary(&self) -> ProjectionSummary {
        let initial_investment = match &self.plan {
            InvestmentPlan::LumpSum(input) => input.principal,
            InvestmentPlan::Sip(_) => self
                .series
                .last()
                .and_then(|p| p.invested)
                .unwrap_or(0.0),
        };

        // Empty series: report the amount put in, i.e. no growth
        let total_returns = self
            .series
            .last()
            .map(|p| p.value)
            .unwrap_or(initial_investment);

        let total_gains = total_returns - initial_investment;
        let percentage_gained = if initial_investment > 0.0 {
            total_gains / initial_investment * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            initial_investment,
            total_returns,
            total_gains,
            percentage_gained,
        }
    }

    /// Invested vs. returns split; losses show as zero returns
    pub fn allocation(&self) -> Allocation {
        let summary = self.summary();
        Allocation {
            invested: summary.initial_investment,
            returns: summary.total_gains.max(0.0),
        }
    }

    /// One table row per projection year
    pub fn rows(&self) -> Vec<YearRow> {
        self.series
            .iter()
            .map(|point| YearRow {
                year: point.year,
                value: point.value,
                invested: point.invested,
                returns: point.value - self.plan.cost_basis(point),
            })
            .collect()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub initial_investment: f64,
    pub total_returns: f64,
    pub total_gains: f64,
    pub percentage_gained: f64,
}

/// Two-way breakdown of the final value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub invested: f64,
    pub returns: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.invested + self.returns
    }

    /// Share of the total that is invested capital, in percent
    pub fn invested_share_percent(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            0.0
        } else {
            self.invested / total * 100.0
        }
    }
}

/// Year table row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested: Option<f64>,
    pub returns: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_summary() {
        let result = InvestmentPlan::LumpSum(LumpSumInput::new(5_000.0, 10.0, 5)).project();
        let summary = result.summary();

        assert_eq!(summary.initial_investment, 5_000.0);
        assert_eq!(summary.total_returns, 8_053.0);
        assert_eq!(summary.total_gains, 3_053.0);
        assert_relative_eq!(summary.percentage_gained, 61.06, epsilon = 1e-9);
    }

    #[test]
    fn test_sip_summary_uses_last_invested() {
        let result = InvestmentPlan::Sip(SipInput::new(5_000.0, 10.0, 1)).project();
        let summary = result.summary();

        assert_eq!(summary.initial_investment, 60_000.0);
        assert_eq!(summary.total_returns, 63_351.0);
        assert_eq!(summary.total_gains, 3_351.0);
    }

    #[test]
    fn test_empty_series_fallbacks() {
        let lump = InvestmentPlan::LumpSum(LumpSumInput::new(7_000.0, 10.0, 0)).project();
        let summary = lump.summary();
        assert_eq!(summary.total_returns, 7_000.0);
        assert_eq!(summary.total_gains, 0.0);
        assert_eq!(summary.percentage_gained, 0.0);

        let sip = InvestmentPlan::Sip(SipInput::new(5_000.0, 10.0, 0)).project();
        let summary = sip.summary();
        assert_eq!(summary.initial_investment, 0.0);
        assert_eq!(summary.total_returns, 0.0);
        assert_eq!(summary.percentage_gained, 0.0);
    }

    #[test]
    fn test_allocation_floors_losses() {
        let result = InvestmentPlan::LumpSum(LumpSumInput::new(1_000.0, -10.0, 2)).project();
        let allocation = result.allocation();

        assert_eq!(allocation.invested, 1_000.0);
        assert_eq!(allocation.returns, 0.0);
        assert_relative_eq!(allocation.invested_share_percent(), 100.0);
    }

    #[test]
    fn test_rows_measure_returns_against_basis() {
        let lump = InvestmentPlan::LumpSum(LumpSumInput::new(5_000.0, 10.0, 2)).project();
        let rows = lump.rows();
        assert_eq!(rows[0].returns, 500.0);
        assert_eq!(rows[1].returns, 1_050.0);
        assert!(rows[0].invested.is_none());

        let sip = InvestmentPlan::Sip(SipInput::new(5_000.0, 10.0, 1)).project();
        let rows = sip.rows();
        assert_eq!(rows[0].invested, Some(60_000.0));
        assert_eq!(rows[0].returns, 3_351.0);
    }

    #[test]
    fn test_with_annual_rate_keeps_other_fields() {
        let plan = InvestmentPlan::Sip(SipInput::new(1_000.0, 8.0, 12).with_step_up(5.0));
        let bumped = plan.with_annual_rate(14.0);

        assert_eq!(bumped.annual_rate_percent(), 14.0);
        assert_eq!(bumped.years(), 12);
        assert_eq!(bumped.mode(), InvestmentMode::Sip);
    }

    #[test]
    fn test_plan_json_is_tagged_by_mode() {
        let plan: InvestmentPlan = serde_json::from_str(
            r#"{"mode": "SIP", "monthly_contribution": 2000.0, "years": 3}"#,
        )
        .unwrap();

        match plan {
            InvestmentPlan::Sip(input) => {
                assert_eq!(input.monthly_contribution, 2_000.0);
                assert_eq!(input.annual_rate_percent, 10.0);
            }
            other => panic!("expected SIP plan, got {:?}", other),
        }
    }
}
