//! UBA Pipeline — Behavioral feature engineering for insider-threat scoring.
//!
//! Modular structure:
//! - [`ingest`] — Typed CSV readers for logon, file, email, psychometric sources
//! - [`features`] — Per-source feature extractors and the merge/align pipeline
//! - [`model`] — ONNX anomaly scorer behind an injectable trait
//! - [`risk`] — Decision-score thresholding into normal/anomalous verdicts
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod ingest;
pub mod features;
pub mod model;
pub mod risk;
pub mod logging;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use ingest::{EmailEvent, FileEvent, LogonEvent, PsychometricRecord};
pub use features::{FeatureMatrix, FeaturePipeline, UserFeatures, FEATURE_COLUMNS};
pub use model::{AnomalyScorer, OnnxScorer};
pub use risk::{RiskEngine, UserVerdict, Verdict};
pub use logging::StructuredLogger;
