//! Typed inputs for the two investment modes

pub mod bounds;

pub use bounds::InputBounds;

use crate::projection::{project_lump_sum, project_sip, ProjectionSeries};
use serde::{Deserialize, Serialize};

/// Parameters for a single upfront investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumpSumInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl Default for LumpSumInput {
    fn default() -> Self {
        Self {
            principal: 5_000.0,
            annual_rate_percent: 10.0,
            years: 5,
        }
    }
}

impl LumpSumInput {
    pub fn new(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self { principal, annual_rate_percent, years }
    }

    /// Replace the fields that are given, keep the rest
    pub fn with_overrides(self, principal: Option<f64>, annual_rate_percent: Option<f64>, years: Option<u32>) -> Self {
        Self {
            principal: principal.unwrap_or(self.principal),
            annual_rate_percent: annual_rate_percent.unwrap_or(self.annual_rate_percent),
            years: years.unwrap_or(self.years),
        }
    }

    /// Copy with every field clamped to its control range
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            principal: bounds::LUMP_SUM_PRINCIPAL.clamp(self.principal),
            annual_rate_percent: bounds::ANNUAL_RATE_PERCENT.clamp(self.annual_rate_percent),
            years: bounds::YEARS.clamp_count(self.years),
        };
        if clamped != *self {
            log::warn!("Lump sum input {:?} clamped to {:?}", self, clamped);
        }
        clamped
    }

    pub fn project(&self) -> ProjectionSeries {
        project_lump_sum(self.principal, self.annual_rate_percent, self.years)
    }
}

/// Parameters for a monthly contribution plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipInput {
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
    pub step_up_enabled: bool,
    pub step_up_rate_percent: f64,
}

impl Default for SipInput {
    fn default() -> Self {
        Self {
            monthly_contribution: 5_000.0,
            annual_rate_percent: 10.0,
            years: 5,
            step_up_enabled: false,
            step_up_rate_percent: 5.0,
        }
    }
}

impl SipInput {
    pub fn new(monthly_contribution: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            monthly_contribution,
            annual_rate_percent,
            years,
            ..Self::default()
        }
    }

    /// Enable an annual step-up of the monthly contribution
    pub fn with_step_up(mut self, step_up_rate_percent: f64) -> Self {
        self.step_up_enabled = true;
        self.step_up_rate_percent = step_up_rate_percent;
        self
    }

    /// Turn the step-up off; the rate is kept for a later re-enable
    pub fn without_step_up(mut self) -> Self {
        self.step_up_enabled = false;
        self
    }

    /// Replace the fields that are given, keep the rest.
    ///
    /// A step-up rate also enables step-up.
    pub fn with_overrides(
        self,
        monthly_contribution: Option<f64>,
        annual_rate_percent: Option<f64>,
        years: Option<u32>,
        step_up_rate_percent: Option<f64>,
    ) -> Self {
        let input = Self {
            monthly_contribution: monthly_contribution.unwrap_or(self.monthly_contribution),
            annual_rate_percent: annual_rate_percent.unwrap_or(self.annual_rate_percent),
            years: years.unwrap_or(self.years),
            ..self
        };
        match step_up_rate_percent {
            Some(rate) => input.with_step_up(rate),
            None => input,
        }
    }

    /// Copy with every field clamped to its control range.
    ///
    /// The step-up rate is clamped even when disabled; the projector ignores it then.
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            monthly_contribution: bounds::SIP_MONTHLY_CONTRIBUTION.clamp(self.monthly_contribution),
            annual_rate_percent: bounds::ANNUAL_RATE_PERCENT.clamp(self.annual_rate_percent),
            years: bounds::YEARS.clamp_count(self.years),
            step_up_enabled: self.step_up_enabled,
            step_up_rate_percent: bounds::STEP_UP_RATE_PERCENT.clamp(self.step_up_rate_percent),
        };
        if clamped != *self {
            log::warn!("SIP input {:?} clamped to {:?}", self, clamped);
        }
        clamped
    }

    pub fn project(&self) -> ProjectionSeries {
        project_sip(
            self.monthly_contribution,
            self.annual_rate_percent,
            self.years,
            self.step_up_enabled,
            self.step_up_rate_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let ls = LumpSumInput::default();
        assert_eq!(ls.clamped(), ls);

        let sip = SipInput::default();
        assert_eq!(sip.clamped(), sip);
    }

    #[test]
    fn test_lump_sum_clamped() {
        let input = LumpSumInput::new(200.0, 45.0, 0).clamped();
        assert_eq!(input, LumpSumInput::new(1_000.0, 30.0, 1));
    }

    #[test]
    fn test_sip_step_up_builder() {
        let input = SipInput::new(2_000.0, 12.0, 10).with_step_up(7.0);
        assert!(input.step_up_enabled);
        assert_eq!(input.step_up_rate_percent, 7.0);
        assert_eq!(input.project().len(), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input: SipInput = serde_json::from_str(r#"{"monthly_contribution": 1500.0}"#).unwrap();
        assert_eq!(input.monthly_contribution, 1500.0);
        assert_eq!(input.years, 5);
        assert!(!input.step_up_enabled);
    }

    #[test]
    fn test_lump_sum_overrides() {
        let configured = LumpSumInput::new(20_000.0, 9.0, 12);

        assert_eq!(configured.with_overrides(None, None, None), configured);

        let input = configured.with_overrides(None, Some(0.0), Some(3));
        assert_eq!(input, LumpSumInput::new(20_000.0, 0.0, 3));
    }

    #[test]
    fn test_sip_overrides_keep_unset_fields() {
        let configured = SipInput::new(8_000.0, 11.0, 15).with_step_up(4.0);

        assert_eq!(configured.with_overrides(None, None, None, None), configured);

        let input = configured.with_overrides(Some(5_000.0), None, Some(2), None);
        assert_eq!(input.monthly_contribution, 5_000.0);
        assert_eq!(input.annual_rate_percent, 11.0);
        assert_eq!(input.years, 2);
        assert!(input.step_up_enabled);
        assert_eq!(input.step_up_rate_percent, 4.0);
    }

    #[test]
    fn test_sip_step_up_override_enables() {
        let input = SipInput::default().with_overrides(Some(5_000.0), None, Some(2), Some(10.0));
        assert!(input.step_up_enabled);

        let last = *input.project().last().unwrap();
        assert_eq!(last.invested, Some(126_000.0));
        assert_eq!(last.value, 139_672.0);
    }

    #[test]
    fn test_step_up_can_be_switched_off() {
        let configured: SipInput =
            serde_json::from_str(r#"{"step_up_enabled": true, "step_up_rate_percent": 8.0}"#).unwrap();

        let input = configured.with_overrides(None, None, None, None).without_step_up();
        assert!(!input.step_up_enabled);
        assert_eq!(input.step_up_rate_percent, 8.0);
        assert_eq!(input.project(), SipInput::default().project());
    }
}
