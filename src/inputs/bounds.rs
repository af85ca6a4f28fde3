//! Bounded ranges for calculator inputs
//!
//! Mirrors the slider controls of the calculator: each input has a minimum,
//! a maximum and a step, and raw values snap onto that grid.

/// Closed range with a step grid anchored at `min`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Investment period in years
pub const YEARS: InputBounds = InputBounds { min: 1.0, max: 30.0, step: 1.0 };

/// Lump-sum principal
pub const LUMP_SUM_PRINCIPAL: InputBounds = InputBounds { min: 1_000.0, max: 10_000_000.0, step: 1_000.0 };

/// SIP monthly contribution
pub const SIP_MONTHLY_CONTRIBUTION: InputBounds = InputBounds { min: 500.0, max: 100_000.0, step: 500.0 };

/// Expected annual return (percent)
pub const ANNUAL_RATE_PERCENT: InputBounds = InputBounds { min: 1.0, max: 30.0, step: 0.5 };

/// Annual SIP step-up (percent)
pub const STEP_UP_RATE_PERCENT: InputBounds = InputBounds { min: 1.0, max: 20.0, step: 1.0 };

impl InputBounds {
    /// Clamp into range and snap to the nearest step.
    ///
    /// Non-finite values fall back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }

        let bounded = value.clamp(self.min, self.max);
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Clamp a year count
    pub fn clamp_count(&self, value: u32) -> u32 {
        self.clamp(value as f64) as u32
    }
}
