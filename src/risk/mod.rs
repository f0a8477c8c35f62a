//! Decision-score thresholding into per-user verdicts.

mod engine;

pub use engine::{RiskEngine, UserVerdict, Verdict};
