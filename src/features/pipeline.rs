//! Merge/align: run the four extractors and outer-join their outputs on user.

use super::{email, file_access, logon, psychometric, FeatureMatrix, UserFeatures};
use crate::ingest::{EmailEvent, FileEvent, LogonEvent, PsychometricRecord};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Stateless single-pass transform from the four raw event tables to one
/// aligned feature matrix. Each invocation is independent; extractor order
/// does not matter and the result is deterministic for identical inputs.
pub struct FeaturePipeline;

impl FeaturePipeline {
    pub fn new() -> Self {
        Self
    }

    /// Outer-join semantics: the output holds one row for every user observed
    /// in ANY input, with 0.0 filled wherever a user is absent from a source.
    pub fn run(
        &self,
        logon_events: &[LogonEvent],
        file_events: &[FileEvent],
        email_events: &[EmailEvent],
        psychometric: &[PsychometricRecord],
    ) -> FeatureMatrix {
        let logon = logon::extract(logon_events);
        let file = file_access::extract(file_events);
        let email = email::extract(email_events);
        let psycho = psychometric::extract(psychometric);

        let users: BTreeSet<&String> = logon
            .keys()
            .chain(file.keys())
            .chain(email.keys())
            .chain(psycho.keys())
            .collect();

        let rows: BTreeMap<String, UserFeatures> = users
            .into_iter()
            .map(|user| {
                let features = UserFeatures {
                    logon: logon.get(user).cloned().unwrap_or_default(),
                    file: file.get(user).cloned().unwrap_or_default(),
                    email: email.get(user).cloned().unwrap_or_default(),
                    personality_risk_index: psycho.get(user).copied().unwrap_or(0.0),
                };
                (user.clone(), features)
            })
            .collect();

        info!(
            users = rows.len(),
            logon_rows = logon_events.len(),
            file_rows = file_events.len(),
            email_rows = email_events.len(),
            psychometric_rows = psychometric.len(),
            "feature matrix built"
        );
        FeatureMatrix::from_rows(rows)
    }
}

impl Default for FeaturePipeline {
    fn default() -> Self {
        Self::new()
    }
}
