//! Per-source behavioral feature extraction and the merge/align pipeline.

mod logon;
mod file_access;
mod email;
mod psychometric;
mod burst;
mod pipeline;

pub use burst::{burst_score, BURST_GAP_SECS, FIRST_EVENT_GAP_SECS};
pub use email::EmailFeatures;
pub use file_access::FileAccessFeatures;
pub use logon::LogonFeatures;
pub use pipeline::FeaturePipeline;
pub use psychometric::personality_risk_index;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column contract for the scoring model, in the exact order the vector is
/// laid out. 19 numeric features: 6 logon, 6 file, 6 email, 1 psychometric.
pub const FEATURE_COLUMNS: [&str; 19] = [
    "total_logons",
    "after_hours_logons",
    "weekend_logons",
    "unique_machines_used",
    "avg_logon_hour",
    "logon_logoff_ratio",
    "usb_file_writes",
    "usb_file_reads",
    "unique_files_accessed",
    "file_write_ratio",
    "sensitive_file_accesses",
    "burst_file_activity_score",
    "emails_sent",
    "after_hours_emails",
    "emails_with_attachments",
    "avg_email_size",
    "external_domain_emails",
    "burst_email_activity_score",
    "personality_risk_index",
];

/// An event is after-hours when its local hour-of-day falls outside 08..=18.
pub(crate) fn is_after_hours(hour: u32) -> bool {
    hour < 8 || hour > 18
}

/// One user's full feature row. Sub-table defaults are all-zero, so a user
/// absent from a source fills with 0 by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFeatures {
    #[serde(flatten)]
    pub logon: LogonFeatures,
    #[serde(flatten)]
    pub file: FileAccessFeatures,
    #[serde(flatten)]
    pub email: EmailFeatures,
    pub personality_risk_index: f64,
}

impl UserFeatures {
    /// Flatten to the model input layout; order matches [`FEATURE_COLUMNS`].
    pub fn to_vector(&self) -> [f64; 19] {
        [
            self.logon.total_logons,
            self.logon.after_hours_logons,
            self.logon.weekend_logons,
            self.logon.unique_machines_used,
            self.logon.avg_logon_hour,
            self.logon.logon_logoff_ratio,
            self.file.usb_file_writes,
            self.file.usb_file_reads,
            self.file.unique_files_accessed,
            self.file.file_write_ratio,
            self.file.sensitive_file_accesses,
            self.file.burst_file_activity_score,
            self.email.emails_sent,
            self.email.after_hours_emails,
            self.email.emails_with_attachments,
            self.email.avg_email_size,
            self.email.external_domain_emails,
            self.email.burst_email_activity_score,
            self.personality_risk_index,
        ]
    }
}

/// Aligned per-user feature matrix, keyed by user identifier. Keys are the
/// union of the users observed across all four inputs; iteration order is
/// deterministic (sorted by user) so reruns are bit-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows: BTreeMap<String, UserFeatures>,
}

impl FeatureMatrix {
    pub(crate) fn from_rows(rows: BTreeMap<String, UserFeatures>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, user: &str) -> Option<&UserFeatures> {
        self.rows.get(user)
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UserFeatures)> {
        self.rows.iter().map(|(u, f)| (u.as_str(), f))
    }

    /// Row-major vectors in user order, for handing to a scorer.
    pub fn to_vectors(&self) -> Vec<[f64; 19]> {
        self.rows.values().map(UserFeatures::to_vector).collect()
    }
}
