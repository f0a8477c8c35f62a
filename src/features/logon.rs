//! Logon-source features: session counts, odd-hours activity, machine spread.

use super::is_after_hours;
use crate::ingest::LogonEvent;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use chrono::{Datelike, Timelike};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogonFeatures {
    pub total_logons: f64,
    pub after_hours_logons: f64,
    pub weekend_logons: f64,
    pub unique_machines_used: f64,
    pub avg_logon_hour: f64,
    /// logons / (logoffs + 1); the +1 denominator is deliberate — it avoids
    /// division by zero and dampens the ratio for users with few logoffs.
    pub logon_logoff_ratio: f64,
}

#[derive(Default)]
struct Acc {
    logons: u64,
    logoffs: u64,
    after_hours: u64,
    weekend: u64,
    machines: HashSet<String>,
    hour_sum: u64,
    hour_rows: u64,
}

/// Aggregate per user. Every user appearing in the table gets an entry, even
/// when none of their rows is a logon; rows with unparsable dates still count
/// toward totals but drop out of the hour/weekday aggregates.
pub(super) fn extract(events: &[LogonEvent]) -> BTreeMap<String, LogonFeatures> {
    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();

    for ev in events {
        let acc = accs.entry(ev.user.clone()).or_default();
        if ev.is_logoff() {
            acc.logoffs += 1;
        }
        if !ev.is_logon() {
            continue;
        }
        acc.logons += 1;
        acc.machines.insert(ev.pc.clone());
        if let Some(ts) = ev.timestamp() {
            let hour = ts.hour();
            acc.hour_sum += u64::from(hour);
            acc.hour_rows += 1;
            if is_after_hours(hour) {
                acc.after_hours += 1;
            }
            // Monday = 0; Saturday/Sunday are 5/6
            if ts.weekday().num_days_from_monday() >= 5 {
                acc.weekend += 1;
            }
        }
    }

    accs.into_iter()
        .map(|(user, acc)| {
            let avg_logon_hour = if acc.hour_rows == 0 {
                0.0
            } else {
                acc.hour_sum as f64 / acc.hour_rows as f64
            };
            let features = LogonFeatures {
                total_logons: acc.logons as f64,
                after_hours_logons: acc.after_hours as f64,
                weekend_logons: acc.weekend as f64,
                unique_machines_used: acc.machines.len() as f64,
                avg_logon_hour,
                logon_logoff_ratio: acc.logons as f64 / (acc.logoffs as f64 + 1.0),
            };
            (user, features)
        })
        .collect()
}
