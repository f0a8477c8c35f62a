//! Email log source: one row per email action.

use super::{parse_timestamp, read_table};
use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub(crate) const INPUT: &str = "email";
const REQUIRED: &[&str] = &["user", "date", "activity", "to", "attachments", "size"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailEvent {
    pub user: String,
    pub date: String,
    /// `send` rows drive the send-based aggregates; matched case-insensitively.
    pub activity: String,
    /// Recipient address; empty cell reads as None.
    pub to: Option<String>,
    /// Attachment list or count; any non-empty cell counts as an attachment.
    pub attachments: Option<String>,
    /// Message size in bytes; empty cell reads as None and is skipped by the
    /// size average.
    pub size: Option<f64>,
}

impl EmailEvent {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    pub fn is_send(&self) -> bool {
        self.activity.eq_ignore_ascii_case("send")
    }
}

pub fn read_email<R: Read>(reader: R) -> Result<Vec<EmailEvent>> {
    read_table(reader, INPUT, REQUIRED)
}
