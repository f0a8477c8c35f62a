//! Pipeline configuration. Feature semantics (burst threshold, after-hours
//! window, trait weights) are fixed by the trained model's contract and are
//! deliberately not configurable here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Paths to the four input CSV tables
    pub inputs: InputsConfig,
    /// Path to the ONNX anomaly scoring model
    pub model_path: PathBuf,
    /// Verdict thresholding
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    pub logon: PathBuf,
    pub file: PathBuf,
    pub email: PathBuf,
    pub psychometric: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Decision scores below this are anomalous (signed decision function,
    /// lower = more anomalous)
    pub anomaly_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inputs: InputsConfig::default(),
            model_path: PathBuf::from("model.onnx"),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            logon: PathBuf::from("logon.csv"),
            file: PathBuf::from("file.csv"),
            email: PathBuf::from("email.csv"),
            psychometric: PathBuf::from("psychometric.csv"),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: 0.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl PipelineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<PipelineConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
