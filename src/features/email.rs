//! Email-source features: send volume, attachments, off-hours traffic,
//! recipient heuristic, burst activity.

use super::burst::burst_score;
use super::is_after_hours;
use crate::ingest::EmailEvent;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailFeatures {
    pub emails_sent: f64,
    pub after_hours_emails: f64,
    pub emails_with_attachments: f64,
    pub avg_email_size: f64,
    /// Counts recipients containing "@". A crude external-mail proxy that does
    /// not actually distinguish internal from external domains; kept as-is to
    /// match the trained model's feature contract.
    pub external_domain_emails: f64,
    pub burst_email_activity_score: f64,
}

#[derive(Default)]
struct Acc {
    sends: u64,
    after_hours: u64,
    attachments: u64,
    size_sum: f64,
    size_rows: u64,
    at_recipients: u64,
    timestamps: Vec<NaiveDateTime>,
}

pub(super) fn extract(events: &[EmailEvent]) -> BTreeMap<String, EmailFeatures> {
    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();

    for ev in events {
        let acc = accs.entry(ev.user.clone()).or_default();
        let ts = ev.timestamp();
        if ev.is_send() {
            acc.sends += 1;
            if let Some(size) = ev.size {
                acc.size_sum += size;
                acc.size_rows += 1;
            }
            if let Some(ts) = ts {
                if is_after_hours(ts.hour()) {
                    acc.after_hours += 1;
                }
            }
        }
        if ev.attachments.as_deref().is_some_and(|a| !a.is_empty()) {
            acc.attachments += 1;
        }
        if ev.to.as_deref().is_some_and(|t| t.contains('@')) {
            acc.at_recipients += 1;
        }
        if let Some(ts) = ts {
            acc.timestamps.push(ts);
        }
    }

    accs.into_iter()
        .map(|(user, acc)| {
            let avg_email_size = if acc.size_rows == 0 {
                0.0
            } else {
                acc.size_sum / acc.size_rows as f64
            };
            let features = EmailFeatures {
                emails_sent: acc.sends as f64,
                after_hours_emails: acc.after_hours as f64,
                emails_with_attachments: acc.attachments as f64,
                avg_email_size,
                external_domain_emails: acc.at_recipients as f64,
                burst_email_activity_score: burst_score(&acc.timestamps) as f64,
            };
            (user, features)
        })
        .collect()
}
