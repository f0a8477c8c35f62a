//! File-source features: removable-media traffic, sensitive filenames,
//! write ratio, burst activity.

use super::burst::burst_score;
use crate::ingest::FileEvent;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Filenames containing any of these mark a sensitive access.
const SENSITIVE_KEYWORDS: &[&str] = &["secret", "confidential", "password", "private", "internal"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileAccessFeatures {
    pub usb_file_writes: f64,
    pub usb_file_reads: f64,
    pub unique_files_accessed: f64,
    /// write actions / (total actions + 1); same deliberate +1 damping as the
    /// logon ratio.
    pub file_write_ratio: f64,
    pub sensitive_file_accesses: f64,
    pub burst_file_activity_score: f64,
}

#[derive(Default)]
struct Acc {
    total: u64,
    usb_writes: u64,
    usb_reads: u64,
    writes: u64,
    sensitive: u64,
    filenames: HashSet<String>,
    timestamps: Vec<NaiveDateTime>,
}

fn is_sensitive(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    SENSITIVE_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub(super) fn extract(events: &[FileEvent]) -> BTreeMap<String, FileAccessFeatures> {
    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();

    for ev in events {
        let acc = accs.entry(ev.user.clone()).or_default();
        acc.total += 1;
        if ev.to_removable_media {
            acc.usb_writes += 1;
        }
        if ev.from_removable_media {
            acc.usb_reads += 1;
        }
        // substring match: "File Write Heavy" counts as a write
        if ev.activity.to_ascii_lowercase().contains("write") {
            acc.writes += 1;
        }
        if is_sensitive(&ev.filename) {
            acc.sensitive += 1;
        }
        acc.filenames.insert(ev.filename.clone());
        if let Some(ts) = ev.timestamp() {
            acc.timestamps.push(ts);
        }
    }

    accs.into_iter()
        .map(|(user, acc)| {
            let features = FileAccessFeatures {
                usb_file_writes: acc.usb_writes as f64,
                usb_file_reads: acc.usb_reads as f64,
                unique_files_accessed: acc.filenames.len() as f64,
                file_write_ratio: acc.writes as f64 / (acc.total as f64 + 1.0),
                sensitive_file_accesses: acc.sensitive as f64,
                burst_file_activity_score: burst_score(&acc.timestamps) as f64,
            };
            (user, features)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_keyword_match_is_case_insensitive() {
        assert!(is_sensitive("Q3_CONFIDENTIAL_forecast.xlsx"));
        assert!(is_sensitive("my_Passwords.txt"));
        assert!(!is_sensitive("meeting_notes.docx"));
    }
}
