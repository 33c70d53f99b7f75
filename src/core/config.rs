/*!
 * Simulator Configuration
 * Environment-driven settings for the command-line front end
 */

use crate::core::errors::SimulatorError;
use crate::metrics::SwitchCostPolicy;
use serde::Serialize;
use std::path::PathBuf;

pub const ENV_INPUT: &str = "SCHED_INPUT";
pub const ENV_SWITCH_COST: &str = "SCHED_SWITCH_COST";
pub const ENV_OUTPUT_JSON: &str = "SCHED_OUTPUT_JSON";
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";

pub const DEFAULT_INPUT: &str = "processes.txt";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorConfig {
    pub input_path: PathBuf,
    pub switch_cost: SwitchCostPolicy,
    pub output_json: bool,
    pub trace_json: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            switch_cost: SwitchCostPolicy::default(),
            output_json: false,
            trace_json: false,
        }
    }
}

impl SimulatorConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, SimulatorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    ///
    /// Unset keys fall back to defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SimulatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_INPUT).filter(|v| !v.trim().is_empty()) {
            config.input_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_SWITCH_COST) {
            config.switch_cost = SwitchCostPolicy::from_str(&raw)
                .map_err(|e| SimulatorError::Configuration(format!("{ENV_SWITCH_COST}: {e}")))?;
        }
        if let Some(raw) = lookup(ENV_OUTPUT_JSON) {
            config.output_json = parse_flag(ENV_OUTPUT_JSON, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = parse_flag(ENV_TRACE_JSON, &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, SimulatorError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SimulatorError::Configuration(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SimulatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.input_path, PathBuf::from("processes.txt"));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = SimulatorConfig::from_lookup(lookup(&[
            (ENV_INPUT, "/tmp/jobs.txt"),
            (ENV_SWITCH_COST, "incoming"),
            (ENV_OUTPUT_JSON, "true"),
            (ENV_TRACE_JSON, "1"),
        ]))
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("/tmp/jobs.txt"));
        assert_eq!(config.switch_cost, SwitchCostPolicy::Incoming);
        assert!(config.output_json);
        assert!(config.trace_json);
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(SimulatorConfig::from_lookup(lookup(&[(ENV_SWITCH_COST, "-2")])).is_err());
        assert!(SimulatorConfig::from_lookup(lookup(&[(ENV_OUTPUT_JSON, "maybe")])).is_err());
    }
}
