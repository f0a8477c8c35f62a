//! File-access log source: one row per file action, with removable-media flags.

use super::{de_flexible_bool, parse_timestamp, read_table};
use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub(crate) const INPUT: &str = "file";
const REQUIRED: &[&str] = &[
    "user",
    "date",
    "activity",
    "filename",
    "to_removable_media",
    "from_removable_media",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEvent {
    pub user: String,
    pub date: String,
    /// Free text; a "write" substring anywhere marks a write action.
    pub activity: String,
    pub filename: String,
    #[serde(deserialize_with = "de_flexible_bool")]
    pub to_removable_media: bool,
    #[serde(deserialize_with = "de_flexible_bool")]
    pub from_removable_media: bool,
}

impl FileEvent {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }
}

pub fn read_file_events<R: Read>(reader: R) -> Result<Vec<FileEvent>> {
    read_table(reader, INPUT, REQUIRED)
}
