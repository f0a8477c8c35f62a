//! Anomaly scoring boundary. The model is trained elsewhere; this crate only
//! requires something that maps the feature matrix to per-user decision
//! scores.

mod onnx;

pub use onnx::OnnxScorer;

use crate::error::Result;
use crate::features::FeatureMatrix;

/// Injected scorer seam. Implementations are immutable once constructed and
/// owned by the calling application, not the pipeline.
///
/// Sign convention (signed decision function): lower / more negative means
/// more anomalous. Labeling against a threshold happens in [`crate::risk`].
pub trait AnomalyScorer {
    /// One score per matrix row, in the matrix's user order.
    fn decision_scores(&self, matrix: &FeatureMatrix) -> Result<Vec<f32>>;
}
