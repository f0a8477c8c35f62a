//! Psychometric feature: a fixed linear weighting of the five OCEAN traits.

use crate::ingest::PsychometricRecord;
use std::collections::BTreeMap;

/// `0.2·O + 0.25·(100−C) + 0.25·N + 0.15·E + 0.15·(100−A)`.
///
/// Weights sum to 1.0 and are not configurable: the domain hypothesis is that
/// low conscientiousness, high neuroticism, and low agreeableness raise risk,
/// so C and A enter inverted.
pub fn personality_risk_index(r: &PsychometricRecord) -> f64 {
    0.2 * r.openness
        + 0.25 * (100.0 - r.conscientiousness)
        + 0.25 * r.neuroticism
        + 0.15 * r.extraversion
        + 0.15 * (100.0 - r.agreeableness)
}

pub(super) fn extract(records: &[PsychometricRecord]) -> BTreeMap<String, f64> {
    records
        .iter()
        .map(|r| (r.user.clone(), personality_risk_index(r)))
        .collect()
}
