//! Configuration for runs and sweeps.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with LIPKIN_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use lipkin_prep::DegeneratePolicy;

use crate::report::AcceptanceRule;

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LipkinConfig {
    /// Single-run settings
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Parameter sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings applied to every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Acceptance band half-width in standard errors
    #[serde(default = "default_tolerance_sigmas")]
    pub tolerance_sigmas: f64,

    /// How the sampled mean is compared with the target
    #[serde(default)]
    pub acceptance: AcceptanceRule,

    /// Handling of zero-norm staircase steps
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Oracle seed; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Register limit for the statevector oracle
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,
}

/// Random parameter sweep settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of independent runs
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Largest M drawn (inclusive)
    #[serde(default = "default_max_m")]
    pub max_m: u32,

    /// Largest V drawn (inclusive)
    #[serde(default = "default_max_v")]
    pub max_v: f64,

    /// Draw nua and nub from {0, 1} instead of fixing them at 0
    #[serde(default = "default_true")]
    pub random_occupations: bool,

    /// Draw the energy level from 0..=M instead of using the ground state
    #[serde(default)]
    pub random_level: bool,

    /// Shots per clique for every trial
    #[serde(default = "default_shots")]
    pub shots: u32,

    /// Seed for parameter draws
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_tolerance_sigmas() -> f64 {
    1.0
}

fn default_max_qubits() -> usize {
    20
}

fn default_trials() -> usize {
    100
}

fn default_max_m() -> u32 {
    6
}

fn default_max_v() -> f64 {
    5.0
}

fn default_shots() -> u32 {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tolerance_sigmas: default_tolerance_sigmas(),
            acceptance: AcceptanceRule::default(),
            degenerate_policy: DegeneratePolicy::default(),
            seed: None,
            max_qubits: default_max_qubits(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            max_m: default_max_m(),
            max_v: default_max_v(),
            random_occupations: true,
            random_level: false,
            shots: default_shots(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LipkinConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: LipkinConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => LipkinConfig::default(),
        };
        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `LIPKIN_*` environment variables into this configuration.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from `lookup`; only keys it returns are applied.
    ///
    /// Unlike a missing key, a present but unparsable value is an error.
    pub fn merge_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Runner
        if let Some(v) = lookup("LIPKIN_TOLERANCE_SIGMAS") {
            self.runner.tolerance_sigmas = parse_var("LIPKIN_TOLERANCE_SIGMAS", &v)?;
        }
        if let Some(v) = lookup("LIPKIN_ACCEPTANCE") {
            self.runner.acceptance = v
                .parse()
                .map_err(|e: String| ConfigError::ParseError(format!("LIPKIN_ACCEPTANCE: {e}")))?;
        }
        if let Some(v) = lookup("LIPKIN_DEGENERATE_POLICY") {
            self.runner.degenerate_policy = match v.as_str() {
                "reject" => DegeneratePolicy::Reject,
                "zero_angle" => DegeneratePolicy::ZeroAngle,
                other => {
                    return Err(ConfigError::ParseError(format!(
                        "LIPKIN_DEGENERATE_POLICY: unknown policy '{other}'"
                    )));
                }
            };
        }
        if let Some(v) = lookup("LIPKIN_SEED") {
            self.runner.seed = Some(parse_var("LIPKIN_SEED", &v)?);
        }
        if let Some(v) = lookup("LIPKIN_MAX_QUBITS") {
            self.runner.max_qubits = parse_var("LIPKIN_MAX_QUBITS", &v)?;
        }

        // Sweep
        if let Some(v) = lookup("LIPKIN_SWEEP_TRIALS") {
            self.sweep.trials = parse_var("LIPKIN_SWEEP_TRIALS", &v)?;
        }
        if let Some(v) = lookup("LIPKIN_SWEEP_SHOTS") {
            self.sweep.shots = parse_var("LIPKIN_SWEEP_SHOTS", &v)?;
        }
        if let Some(v) = lookup("LIPKIN_SWEEP_MAX_M") {
            self.sweep.max_m = parse_var("LIPKIN_SWEEP_MAX_M", &v)?;
        }
        if let Some(v) = lookup("LIPKIN_SWEEP_SEED") {
            self.sweep.seed = Some(parse_var("LIPKIN_SWEEP_SEED", &v)?);
        }

        // Logging
        if let Some(v) = lookup("LIPKIN_LOG_LEVEL") {
            self.logging.level = v;
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.runner.tolerance_sigmas.is_finite() && self.runner.tolerance_sigmas > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "tolerance_sigmas must be positive, got {}",
                self.runner.tolerance_sigmas
            )));
        }
        if self.runner.max_qubits == 0 {
            return Err(ConfigError::ValidationError(
                "max_qubits must be greater than 0".to_string(),
            ));
        }

        if self.sweep.trials == 0 {
            return Err(ConfigError::ValidationError(
                "sweep.trials must be greater than 0".to_string(),
            ));
        }
        if self.sweep.shots == 0 {
            return Err(ConfigError::ValidationError(
                "sweep.shots must be greater than 0".to_string(),
            ));
        }
        if self.sweep.max_m == 0 {
            return Err(ConfigError::ValidationError(
                "sweep.max_m must be at least 1".to_string(),
            ));
        }
        if !(self.sweep.max_v.is_finite() && self.sweep.max_v >= 0.1) {
            return Err(ConfigError::ValidationError(format!(
                "sweep.max_v must be at least 0.1, got {}",
                self.sweep.max_v
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}: cannot parse '{value}'")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = LipkinConfig::default();
        assert_eq!(config.runner.tolerance_sigmas, 1.0);
        assert_eq!(config.runner.acceptance, AcceptanceRule::Magnitude);
        assert_eq!(config.runner.degenerate_policy, DegeneratePolicy::Reject);
        assert_eq!(config.runner.max_qubits, 20);
        assert_eq!(config.sweep.shots, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(LipkinConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LipkinConfig::default();
        config.runner.tolerance_sigmas = 0.0;
        assert!(config.validate().is_err());

        let mut config = LipkinConfig::default();
        config.sweep.shots = 0;
        assert!(config.validate().is_err());

        let mut config = LipkinConfig::default();
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = LipkinConfig::from_yaml(
            "runner:\n  tolerance_sigmas: 3.0\n  acceptance: signed\nsweep:\n  trials: 5\n",
        )
        .unwrap();
        assert_eq!(config.runner.tolerance_sigmas, 3.0);
        assert_eq!(config.runner.acceptance, AcceptanceRule::Signed);
        assert_eq!(config.runner.max_qubits, 20);
        assert_eq!(config.sweep.trials, 5);
        assert_eq!(config.sweep.max_m, 6);
    }

    #[test]
    fn test_yaml_validation_error() {
        let err = LipkinConfig::from_yaml("sweep:\n  trials: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_merge_vars_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LIPKIN_SEED", "42"),
            ("LIPKIN_ACCEPTANCE", "signed"),
            ("LIPKIN_DEGENERATE_POLICY", "zero_angle"),
            ("LIPKIN_SWEEP_TRIALS", "7"),
            ("LIPKIN_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        let config = LipkinConfig::default()
            .merge_vars(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.runner.seed, Some(42));
        assert_eq!(config.runner.acceptance, AcceptanceRule::Signed);
        assert_eq!(config.runner.degenerate_policy, DegeneratePolicy::ZeroAngle);
        assert_eq!(config.sweep.trials, 7);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.runner.tolerance_sigmas, 1.0);
    }

    #[test]
    fn test_merge_vars_rejects_garbage() {
        let err = LipkinConfig::default()
            .merge_vars(|k| (k == "LIPKIN_SEED").then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
