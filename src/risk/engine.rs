//! Maps signed decision scores to normal/anomalous verdicts against a
//! configured threshold.

use crate::config::RiskConfig;
use crate::error::Result;
use crate::features::FeatureMatrix;
use crate::model::AnomalyScorer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Normal,
    Anomalous,
}

impl Verdict {
    /// Signed decision-function convention: a score BELOW the threshold is
    /// anomalous (negative/low = more anomalous).
    pub fn from_score(score: f32, config: &RiskConfig) -> Self {
        if score < config.anomaly_threshold {
            Verdict::Anomalous
        } else {
            Verdict::Normal
        }
    }
}

/// Verdict for a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVerdict {
    pub user: String,
    pub score: f32,
    pub verdict: Verdict,
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn label(&self, score: f32) -> Verdict {
        Verdict::from_score(score, &self.config)
    }

    /// Score the whole matrix through the injected scorer and label each user.
    /// Output order follows the matrix's user order.
    pub fn classify(
        &self,
        matrix: &FeatureMatrix,
        scorer: &dyn AnomalyScorer,
    ) -> Result<Vec<UserVerdict>> {
        let scores = scorer.decision_scores(matrix)?;
        Ok(matrix
            .users()
            .zip(scores)
            .map(|(user, score)| UserVerdict {
                user: user.to_string(),
                score,
                verdict: self.label(score),
            })
            .collect())
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
