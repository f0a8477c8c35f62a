//! Typed CSV ingest for the four behavioral log sources.
//! Column names are matched exactly (case-sensitive); header validation runs
//! before any row is decoded so structural problems fail fast with the input
//! and column named.

mod logon;
mod file;
mod email;
mod psychometric;

pub use logon::{read_logon, LogonEvent};
pub use file::{read_file_events, FileEvent};
pub use email::{read_email, EmailEvent};
pub use psychometric::{read_psychometric, PsychometricRecord};

use crate::error::{PipelineError, Result};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Timestamp formats accepted across the log sources. Anything else parses to
/// `None` and the row is excluded from time-based aggregates only.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Lenient timestamp parse. Malformed dates are a recoverable data issue,
/// never an error.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    for fmt in DATE_ONLY_FORMATS {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Boolean cells arrive as `True`/`False`, `1`/`0`, or empty depending on the
/// exporter; an empty cell reads as false.
pub(crate) fn de_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Ok(true),
        "false" | "f" | "0" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value `{other}`"
        ))),
    }
}

/// Shared table reader: validate the header against the source's required
/// columns, then decode every row. Extra columns are ignored.
pub(crate) fn read_table<R, T>(
    reader: R,
    input: &'static str,
    required: &'static [&'static str],
) -> Result<Vec<T>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::UnparseableInput {
            input,
            reason: e.to_string(),
        })?
        .clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(PipelineError::MissingRequiredColumn { input, column });
        }
    }

    let mut rows = Vec::new();
    for (i, record) in rdr.deserialize::<T>().enumerate() {
        let row = record.map_err(|e| PipelineError::UnparseableInput {
            input,
            // +2: one for the header line, one for 1-based numbering
            reason: format!("row {}: {}", i + 2, e),
        })?;
        rows.push(row);
    }
    tracing::debug!(input, rows = rows.len(), "ingested table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats_accepted() {
        assert!(parse_timestamp("01/02/2010 07:14:00").is_some());
        assert!(parse_timestamp("2010-01-02 07:14:00").is_some());
        assert!(parse_timestamp("2010-01-02").is_some());
    }

    #[test]
    fn garbage_timestamp_is_none() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
