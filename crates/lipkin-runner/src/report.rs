//! Run results, acceptance and exportable reports.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lipkin_model::ModelParameters;

use crate::error::RunnerResult;

/// How a sampled mean is compared with the target energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptanceRule {
    /// `|mean| − k·se ≤ |target| ≤ |mean| + k·se`. Compares magnitudes, so
    /// a mean with the wrong sign can still pass.
    #[default]
    Magnitude,
    /// `|mean − target| ≤ k·se`.
    Signed,
}

impl AcceptanceRule {
    /// True if `target` lies in the band of `sigmas` standard errors.
    pub fn accepts(self, mean: f64, standard_error: f64, target: f64, sigmas: f64) -> bool {
        let band = sigmas * standard_error;
        match self {
            AcceptanceRule::Magnitude => {
                mean.abs() - band <= target.abs() && target.abs() <= mean.abs() + band
            }
            AcceptanceRule::Signed => (mean - target).abs() <= band,
        }
    }
}

impl fmt::Display for AcceptanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptanceRule::Magnitude => f.write_str("magnitude"),
            AcceptanceRule::Signed => f.write_str("signed"),
        }
    }
}

impl FromStr for AcceptanceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "magnitude" => Ok(AcceptanceRule::Magnitude),
            "signed" => Ok(AcceptanceRule::Signed),
            other => Err(format!(
                "unknown acceptance rule '{other}' (expected magnitude or signed)"
            )),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Reference eigenvalue.
    pub target_energy: f64,
    /// Mean of the single-shot estimates.
    pub sample_mean: f64,
    /// Population standard deviation over `√shots`.
    pub standard_error: f64,
    /// Verdict of the acceptance rule.
    pub within_tolerance: bool,
}

impl ExperimentResult {
    /// `|100·(mean − target) / target|`, or `None` for a zero target.
    pub fn relative_error_percent(&self) -> Option<f64> {
        if self.target_energy == 0.0 {
            return None;
        }
        Some((100.0 * (self.sample_mean - self.target_energy) / self.target_energy).abs())
    }

    /// Signed deviation in standard errors.
    pub fn deviation_sigmas(&self) -> f64 {
        (self.sample_mean - self.target_energy) / self.standard_error
    }
}

/// Everything needed to reproduce and judge one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Unique run identifier.
    pub run_id: Uuid,
    /// Completion time.
    pub timestamp: DateTime<Utc>,
    /// Name of the oracle that produced the bitstrings.
    pub oracle: String,
    pub params: ModelParameters,
    /// Energy level index, 0 being the ground state.
    pub level: usize,
    /// Shots per clique.
    pub shots: u32,
    /// Staircase angles that were sampled.
    pub angles: Vec<f64>,
    pub acceptance: AcceptanceRule,
    pub tolerance_sigmas: f64,
    pub result: ExperimentResult,
    /// Absent when the target energy is zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_error_percent: Option<f64>,
}

impl ExperimentReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> RunnerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> RunnerResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a report written by [`write_json`](Self::write_json).
    pub fn read_json(path: impl AsRef<Path>) -> RunnerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_rule_ignores_sign() {
        let rule = AcceptanceRule::Magnitude;
        assert!(rule.accepts(-2.0, 0.1, -2.05, 1.0));
        assert!(rule.accepts(2.0, 0.1, -2.05, 1.0));
        assert!(!rule.accepts(-2.0, 0.1, -2.2, 1.0));
        assert!(rule.accepts(-2.0, 0.1, -2.2, 3.0));
    }

    #[test]
    fn test_signed_rule() {
        let rule = AcceptanceRule::Signed;
        assert!(rule.accepts(-2.0, 0.1, -2.05, 1.0));
        assert!(!rule.accepts(2.0, 0.1, -2.05, 1.0));
    }

    #[test]
    fn test_zero_standard_error_needs_exact_match() {
        assert!(AcceptanceRule::Magnitude.accepts(1.5, 0.0, 1.5, 1.0));
        assert!(!AcceptanceRule::Signed.accepts(1.5, 0.0, 1.4, 1.0));
    }

    #[test]
    fn test_relative_error() {
        let r = ExperimentResult {
            target_energy: -4.0,
            sample_mean: -3.9,
            standard_error: 0.05,
            within_tolerance: false,
        };
        assert!((r.relative_error_percent().unwrap() - 2.5).abs() < 1e-9);
        assert!((r.deviation_sigmas() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_has_no_relative_error() {
        let r = ExperimentResult {
            target_energy: 0.0,
            sample_mean: 0.01,
            standard_error: 0.02,
            within_tolerance: true,
        };
        assert_eq!(r.relative_error_percent(), None);
    }

    #[test]
    fn test_zero_target_report_reads_back() {
        let result = ExperimentResult {
            target_energy: 0.0,
            sample_mean: -0.003,
            standard_error: 0.01,
            within_tolerance: true,
        };
        let report = ExperimentReport {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            oracle: "statevector".into(),
            params: ModelParameters::new(2, 0.0, 0.0, 0, 0).unwrap(),
            level: 1,
            shots: 100,
            angles: vec![0.5, 1.0],
            acceptance: AcceptanceRule::Magnitude,
            tolerance_sigmas: 1.0,
            result,
            relative_error_percent: result.relative_error_percent(),
        };

        let json = report.to_json().unwrap();
        assert!(!json.contains("relative_error_percent"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();
        let back = ExperimentReport::read_json(&path).unwrap();
        assert_eq!(back.relative_error_percent, None);
        assert_eq!(back.run_id, report.run_id);
        assert_eq!(back.result.target_energy, 0.0);
    }

    #[test]
    fn test_rule_parse() {
        assert_eq!("Signed".parse::<AcceptanceRule>().unwrap(), AcceptanceRule::Signed);
        assert!("loose".parse::<AcceptanceRule>().is_err());
    }
}
