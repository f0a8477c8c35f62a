//! ONNX Runtime scorer. Input: [n, feature_dim] f32, output: n decision
//! scores. Uses the `ort` crate; if the model file is missing, runs in no-op
//! mode (all scores 0.0).

use super::AnomalyScorer;
use crate::error::{PipelineError, Result};
use crate::features::FeatureMatrix;
use ndarray::Array2;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static ORT_ENV: OnceLock<Arc<ort::environment::Environment>> = OnceLock::new();

fn init_env() -> &'static Arc<ort::environment::Environment> {
    ORT_ENV.get_or_init(|| {
        ort::init()
            .with_name("uba-pipeline")
            .commit()
            .expect("ORT environment")
    })
}

pub struct OnnxScorer {
    session: Option<ort::session::Session>,
    input_name: String,
    feature_dim: usize,
}

impl OnnxScorer {
    /// Load model from path. If the path is missing, the scorer runs in no-op
    /// mode and every user scores 0.0 (labeled by threshold as usual).
    pub fn load(path: &Path, feature_dim: usize) -> std::result::Result<Self, ort::Error> {
        let _env = init_env();
        let path = path.to_path_buf();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "ONNX model not found; scoring disabled");
            return Ok(Self {
                session: None,
                input_name: String::new(),
                feature_dim,
            });
        }

        let session = ort::session::Session::builder()?.commit_from_file(&path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        Ok(Self {
            session: Some(session),
            input_name,
            feature_dim,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }
}

impl AnomalyScorer for OnnxScorer {
    fn decision_scores(&self, matrix: &FeatureMatrix) -> Result<Vec<f32>> {
        let n = matrix.len();
        let Some(ref session) = self.session else {
            return Ok(vec![0.0; n]);
        };
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut flat = Vec::with_capacity(n * self.feature_dim);
        for row in matrix.to_vectors() {
            flat.extend(row.iter().map(|v| *v as f32));
        }
        let arr = Array2::from_shape_vec((n, self.feature_dim), flat)
            .map_err(|e| PipelineError::Inference(e.to_string()))?;
        let input = ort::value::Value::from_array(arr.into_dyn())
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        let inputs = ort::inputs![self.input_name.as_str() => input]
            .map_err(|e| PipelineError::Inference(e.to_string()))?;
        let outputs = session
            .run(inputs)
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        let out = outputs
            .values()
            .next()
            .ok_or_else(|| PipelineError::Inference("model produced no outputs".into()))?;
        let (_shape, view) = out
            .try_extract_raw_tensor::<f32>()
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        let mut scores: Vec<f32> = view.iter().copied().take(n).collect();
        scores.resize(n, 0.0);
        Ok(scores)
    }
}
