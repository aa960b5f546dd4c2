//! Triage configuration schema and TOML loading.
//!
//! Holds the operator-tunable values of the pipeline: the notification
//! decision thresholds, the per-stage timeout, and the batch-defect table the
//! history correlator consults. The built-in defaults match the values the
//! service shipped with.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Confidence thresholds gating the appointment suggestion.
///
/// The fault rules emit fixed confidence constants, so these thresholds are
/// the only knobs that change notification behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationThresholds {
    /// Above this confidence (or at High historical risk) the message is
    /// urgent and an immediate visit is recommended
    pub urgent_confidence: f64,
    /// Above this confidence a non-urgent check-up is suggested
    pub advisory_confidence: f64,
}

impl Default for NotificationThresholds {
    fn default() -> Self {
        Self {
            urgent_confidence: 0.8,
            advisory_confidence: 0.5,
        }
    }
}

/// Per-stage execution bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageTimeouts {
    /// Maximum wall time for a single pipeline stage, in milliseconds.
    /// A stage exceeding this is reported through the stage-failure path.
    pub stage_ms: u64,
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self { stage_ms: 5000 }
    }
}

/// One row of the batch-defect table.
///
/// The history correlator escalates risk to High when a diagnosis issue and
/// the vehicle's model year both match a row. Kept as a table rather than a
/// branch so new defect batches are a config edit, not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectBatch {
    /// Diagnosis issue label the row applies to (exact match)
    pub issue: String,
    /// Affected manufacturing/model year
    pub year: i32,
    /// Manufacturing batch identifier
    pub batch_id: String,
    /// Historical-pattern description reported to the customer record
    pub pattern: String,
    /// Batch note attached to the correlation
    pub note: String,
}

/// Complete triage service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub thresholds: NotificationThresholds,
    pub timeouts: StageTimeouts,
    pub defect_batches: Vec<DefectBatch>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            thresholds: NotificationThresholds::default(),
            timeouts: StageTimeouts::default(),
            defect_batches: vec![DefectBatch {
                issue: "Coolant Pump Failure".to_string(),
                year: 2022,
                batch_id: "Batch-X".to_string(),
                pattern: "Repeated cooling failures detected in 2022 Model 3 batches."
                    .to_string(),
                note: "Batch-X identified for cooling pump defects.".to_string(),
            }],
        }
    }
}

impl TriageConfig {
    /// Load configuration using the standard fallback order:
    ///
    /// 1. `AUTOTRIAGE_CONFIG` environment variable (path to TOML file)
    /// 2. `triage_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("AUTOTRIAGE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded triage config from AUTOTRIAGE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from AUTOTRIAGE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "AUTOTRIAGE_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("triage_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded triage config from ./triage_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./triage_config.toml, using defaults");
                }
            }
        }

        info!("No triage_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("urgent_confidence", t.urgent_confidence),
            ("advisory_confidence", t.advisory_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.{name} must be within [0.0, 1.0], got {value}"
                )));
            }
        }
        if t.advisory_confidence > t.urgent_confidence {
            warn!(
                advisory = t.advisory_confidence,
                urgent = t.urgent_confidence,
                "advisory_confidence exceeds urgent_confidence — advisory branch is unreachable"
            );
        }
        if self.timeouts.stage_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeouts.stage_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
