//! Calculator configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! calculator's built-in defaults.

use crate::error::CalculatorResult;
use crate::inputs::{LumpSumInput, SipInput};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for projection runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Clamp inputs to the control ranges before projecting
    pub clamp_inputs: bool,

    /// Default lump-sum inputs
    pub lump_sum: LumpSumInput,

    /// Default SIP inputs
    pub sip: SipInput,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            clamp_inputs: true,
            lump_sum: LumpSumInput::default(),
            sip: SipInput::default(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let file = File::open(path.as_ref())?;
        let config = Self::from_reader(BufReader::new(file))?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from any reader
    pub fn from_reader<R: Read>(reader: R) -> CalculatorResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = CalculatorConfig::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert!(config.clamp_inputs);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "clamp_inputs": false,
            "sip": { "monthly_contribution": 10000.0, "step_up_enabled": true }
        }"#;
        let config = CalculatorConfig::from_reader(json.as_bytes()).unwrap();

        assert!(!config.clamp_inputs);
        assert_eq!(config.sip.monthly_contribution, 10_000.0);
        assert!(config.sip.step_up_enabled);
        assert_eq!(config.sip.step_up_rate_percent, 5.0);
        assert_eq!(config.lump_sum, LumpSumInput::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = CalculatorConfig::from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CalculatorConfig::from_json_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CalculatorError::Io(_)));
    }
}
