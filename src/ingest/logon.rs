//! Authentication log source: one row per logon/logoff action.

use super::{parse_timestamp, read_table};
use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub(crate) const INPUT: &str = "logon";
const REQUIRED: &[&str] = &["user", "date", "activity", "pc"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogonEvent {
    pub user: String,
    /// Raw timestamp string; parsed leniently via [`LogonEvent::timestamp`].
    pub date: String,
    /// `logon` or `logoff`, matched case-insensitively.
    pub activity: String,
    /// Machine identifier.
    pub pc: String,
}

impl LogonEvent {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    pub fn is_logon(&self) -> bool {
        self.activity.eq_ignore_ascii_case("logon")
    }

    pub fn is_logoff(&self) -> bool {
        self.activity.eq_ignore_ascii_case("logoff")
    }
}

pub fn read_logon<R: Read>(reader: R) -> Result<Vec<LogonEvent>> {
    read_table(reader, INPUT, REQUIRED)
}
