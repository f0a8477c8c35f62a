//! Pipeline error taxonomy. Structural input problems abort the run;
//! row-level data issues (bad timestamps, empty groups) never surface here —
//! they degrade to sentinels inside the extractors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent from an input table. Checked against the
    /// CSV header before any row is decoded, so this fires before partial work.
    #[error("input `{input}` is missing required column `{column}`")]
    MissingRequiredColumn {
        input: &'static str,
        column: &'static str,
    },

    /// The input could not be read as tabular data at all, or a row could not
    /// be decoded into the source's record type.
    #[error("input `{input}` could not be parsed as tabular data: {reason}")]
    UnparseableInput { input: &'static str, reason: String },

    /// Model inference failed after a session was successfully loaded.
    #[error("scorer inference failed: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
